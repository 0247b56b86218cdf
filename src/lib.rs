//! relnotes: GitHub release notes as a tree of markdown files
//!
//! This crate provides the main relnotes library, re-exporting core
//! functionality from `relnotes-core` and organizing the modules that fetch,
//! classify and write release notes.

pub use relnotes_core::{format_error_with_help, RelnotesError, RelnotesResult, RepositoryTarget};

/// Core module re-exported from relnotes-core.
pub mod core {
    pub use relnotes_core::core::*;
    pub use relnotes_core::*;

    /// Path module re-exported from relnotes-core.
    pub mod path {
        pub use relnotes_core::core::path::*;
    }
}

/// Configuration resolution.
pub mod config;

/// GitHub API client.
pub mod github;

/// Release-to-artifact classification.
pub mod artifacts;

/// Release notes files.
pub mod writer;

/// Fetch orchestration and summaries.
pub mod fetcher;

/// Dependency injection infrastructure.
pub mod di;
