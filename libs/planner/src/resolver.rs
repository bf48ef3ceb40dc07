use crate::{PartitioningHandle, PlannerConfig};

/// Decides whether two different handles describe interchangeable physical
/// distributions, returning the handle both sides can agree on.
pub trait HandleResolver {
    fn common_partitioning(
        &self,
        config: &PlannerConfig,
        left: &PartitioningHandle,
        right: &PartitioningHandle,
    ) -> Option<PartitioningHandle>;
}

impl<F> HandleResolver for F
where
    F: Fn(&PartitioningHandle, &PartitioningHandle) -> Option<PartitioningHandle>,
{
    fn common_partitioning(
        &self,
        _config: &PlannerConfig,
        left: &PartitioningHandle,
        right: &PartitioningHandle,
    ) -> Option<PartitioningHandle> {
        self(left, right)
    }
}

/// Only equal handles are compatible.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCommonPartitioning;

impl HandleResolver for NoCommonPartitioning {
    fn common_partitioning(
        &self,
        _config: &PlannerConfig,
        _left: &PartitioningHandle,
        _right: &PartitioningHandle,
    ) -> Option<PartitioningHandle> {
        None
    }
}

/// Treats connector bucketings with the same bucket count as interchangeable,
/// even when they belong to different catalogs.
#[derive(Debug, Default, Copy, Clone)]
pub struct BucketedHandleResolver;

impl HandleResolver for BucketedHandleResolver {
    fn common_partitioning(
        &self,
        config: &PlannerConfig,
        left: &PartitioningHandle,
        right: &PartitioningHandle,
    ) -> Option<PartitioningHandle> {
        if !config.colocated_join {
            return None;
        }
        match (left, right) {
            (
                PartitioningHandle::Connector {
                    bucket_count: left_buckets,
                    ..
                },
                PartitioningHandle::Connector {
                    bucket_count: right_buckets,
                    ..
                },
            ) if left_buckets == right_buckets => Some(left.clone()),
            _ => None,
        }
    }
}
