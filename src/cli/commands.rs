use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::demo::{sample_directory, sample_tree};
use crate::domain::{display_tree, Reporter};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Report { levels }) => _report(*levels),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Leaves) => _leaves(),
        Some(Commands::Depth) => _depth(),
        Some(Commands::Directory) => _directory(),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn reporter_for(levels: Option<usize>) -> CliResult<Reporter> {
    let settings = Settings::load()?;
    let levels = levels.or(settings.report.max_levels);
    debug!("report levels: {:?}", levels);
    Ok(match levels {
        Some(n) => Reporter::with_max_levels(n),
        None => Reporter::new(),
    })
}

#[instrument]
fn _report(levels: Option<usize>) -> CliResult<()> {
    let tree = sample_tree()?;
    let reporter = reporter_for(levels)?;
    for line in reporter.render(&tree) {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _tree() -> CliResult<()> {
    let tree = sample_tree()?;
    if let Some(rendered) = display_tree(&tree) {
        output::info(&rendered);
    }
    Ok(())
}

#[instrument]
fn _leaves() -> CliResult<()> {
    let tree = sample_tree()?;
    for name in tree.leaf_nodes() {
        output::detail(&name);
    }
    Ok(())
}

#[instrument]
fn _depth() -> CliResult<()> {
    let tree = sample_tree()?;
    output::info(&tree.depth());
    Ok(())
}

#[instrument]
fn _directory() -> CliResult<()> {
    let directory = sample_directory()?;
    let reporter = reporter_for(None)?;
    output::header(&format!(
        "Company directory: {} hierarchies, {} employees",
        directory.trees().len(),
        directory.headcount()
    ));
    for line in directory.render(&reporter) {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::detail("no config directory available"),
        },
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
