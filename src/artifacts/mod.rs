//! Release-to-artifact classification and aggregation
//!
//! A repository's releases arrive newest first, one page at a time. Each
//! non-draft release is assigned to an artifact (a sub-component of a
//! monorepo, or the empty key for a plain repository) and stored according
//! to the [`AggregationMode`] chosen for the run:
//!
//! - **Latest only**: the first stable and the first pre-release seen per
//!   artifact. Once every known artifact has both, paging can stop.
//! - **History**: every release, in arrival order.

pub mod accumulator;
pub mod aggregator;
pub mod classifier;
pub mod release;

pub use accumulator::{AggregationMode, ArtifactAccumulator, ArtifactReleases};
pub use aggregator::{Progress, ReleaseAggregator};
pub use classifier::{ArtifactClassifier, ArtifactMatch};
pub use release::{ReleaseInfo, NO_RELEASE_NOTES};
