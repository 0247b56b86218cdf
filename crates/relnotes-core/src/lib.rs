//! Core utilities shared by the relnotes binary and library.
//!
//! Holds the error type, repository identifiers and the filesystem helpers
//! used when laying out the release notes tree.

pub mod core;

pub use crate::core::error::{RelnotesError, RelnotesResult};
pub use crate::core::error_help::format_error_with_help;
pub use crate::core::repository::RepositoryTarget;
