//! Dependency injection infrastructure
//!
//! The fetcher depends on traits rather than on the GitHub client or the
//! process environment directly.
//!
//! # Example (Testing)
//! ```
//! use relnotes::config::Settings;
//! use relnotes::di::{mocks::*, ServiceContainer};
//! use std::sync::Arc;
//!
//! let source = Arc::new(MockReleaseSource::new());
//! source.add_page("owner/repo", vec![release("v1.0.0", false)]);
//!
//! let container = ServiceContainer::with_providers(Settings::default(), source);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{EnvProvider, ProcessEnv, ReleaseSource};
