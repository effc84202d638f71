//! Pipelines.
//!
//! Collection and training are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait so that both can be chained by the binary.
mod collect;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod train;

pub use collect::{Collect, CollectSummary};
pub use pipeline::Pipeline;
pub use train::Train;
