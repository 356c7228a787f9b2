//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Composite organization hierarchies: employee trees with traversal and reporting
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sample chart as description lines, pre-order
    Report {
        /// Limit the report to N levels (root = level 1)
        #[arg(short, long)]
        levels: Option<usize>,
    },

    /// Show the sample chart as a tree
    Tree,

    /// List leaf employees
    Leaves,

    /// Show hierarchy depth
    Depth,

    /// Report the whole company directory
    Directory,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
