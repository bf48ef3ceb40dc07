mod assignments;
mod config;
mod handle;
mod resolver;

pub mod partitioning;

pub use assignments::Assignments;
pub use config::PlannerConfig;
pub use handle::PartitioningHandle;
pub use partitioning::Partitioning;
pub use resolver::{BucketedHandleResolver, HandleResolver, NoCommonPartitioning};
