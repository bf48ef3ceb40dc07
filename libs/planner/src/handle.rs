use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifies the function that distributes rows of a stage across workers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PartitioningHandle {
    #[display(fmt = "SINGLE")]
    Single,

    #[display(fmt = "COORDINATOR_ONLY")]
    CoordinatorOnly,

    #[display(fmt = "FIXED_HASH")]
    FixedHash,

    #[display(fmt = "FIXED_ARBITRARY")]
    FixedArbitrary,

    #[display(fmt = "FIXED_BROADCAST")]
    FixedBroadcast,

    #[display(fmt = "SCALED_WRITER")]
    ScaledWriter,

    #[display(fmt = "SOURCE")]
    Source,

    #[display(fmt = "ROUND_ROBIN")]
    RoundRobin,

    /// Bucketing defined by a catalog.
    #[display(fmt = "{}:buckets={}", catalog, bucket_count)]
    Connector { catalog: String, bucket_count: usize },
}

impl PartitioningHandle {
    pub fn connector(catalog: impl Into<String>, bucket_count: usize) -> Self {
        PartitioningHandle::Connector {
            catalog: catalog.into(),
            bucket_count,
        }
    }
}
