//! Domain layer: entities and hierarchy logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod directory;
pub mod employee;
pub mod error;
pub mod report;

pub use arena::{OrgNode, OrgTree, PostOrderIterator, PreOrderIterator};
pub use directory::Directory;
pub use employee::Employee;
pub use error::{DomainError, DomainResult};
pub use report::{display_tree, Reporter};
