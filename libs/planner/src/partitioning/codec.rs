use anyhow::{Context, Result};

use crate::partitioning::Partitioning;

impl Partitioning {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).context("failed to serialize partitioning.")
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        bincode::deserialize(data).context("failed to deserialize partitioning.")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize partitioning.")
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).context("failed to deserialize partitioning.")
    }
}
