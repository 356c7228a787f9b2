//! Composite organization hierarchies: employee trees with traversal and
//! reporting.
//!
//! An [`OrgTree`] is an arena-backed tree of [`Employee`] nodes with
//! ordered subordinates; [`Reporter`] walks it pre-order and renders one
//! description line per node. [`Directory`] groups several independent
//! hierarchies.

pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use config::Settings;
pub use domain::{display_tree, Directory, DomainError, Employee, OrgNode, OrgTree, Reporter};
