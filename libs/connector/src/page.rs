use anyhow::Result;
use bytes::Bytes;

/// The encoded values of one column. The encoding belongs to the connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    data: Bytes,
    position_count: usize,
}

impl Block {
    pub fn new(data: impl Into<Bytes>, position_count: usize) -> Self {
        Self {
            data: data.into(),
            position_count,
        }
    }

    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    #[inline]
    pub fn position_count(&self) -> usize {
        self.position_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position_count == 0
    }
}

/// A batch of rows stored as one block per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    blocks: Vec<Block>,
}

impl Page {
    pub fn try_new(blocks: Vec<Block>) -> Result<Self> {
        anyhow::ensure!(!blocks.is_empty(), "invalid page");

        let position_count = blocks[0].position_count;
        for block in &blocks[1..] {
            anyhow::ensure!(block.position_count == position_count, "invalid page");
        }

        Ok(Self { blocks })
    }

    #[inline]
    pub fn block(&self, channel: usize) -> Option<&Block> {
        self.blocks.get(channel)
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn channel_count(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn position_count(&self) -> usize {
        self.blocks[0].position_count
    }
}
