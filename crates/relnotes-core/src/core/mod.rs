pub mod error;
pub mod error_help;
pub mod path;
pub mod repository;

pub use error::{RelnotesError, RelnotesResult};
pub use repository::RepositoryTarget;
