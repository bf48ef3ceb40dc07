use anyhow::Result;
use bytes::Bytes;

use crate::{Block, Page};

/// A page source whose connector can also change the rows it produced.
///
/// Row ids are carried in a block handed back by the engine. Connectors opt
/// into deletes and updates by overriding the corresponding method.
#[async_trait::async_trait]
pub trait UpdatablePageSource: Send {
    async fn delete_rows(&mut self, _row_ids: Block) -> Result<()> {
        anyhow::bail!("This connector does not support row-level delete")
    }

    /// `channels` lists the page channels holding the new values of
    /// `updated_columns`, followed by the row id channel.
    async fn update_rows(
        &mut self,
        _page: Page,
        _channels: Vec<usize>,
        _updated_columns: Vec<String>,
    ) -> Result<()> {
        anyhow::bail!("This connector does not support row update")
    }

    /// Commits the pending changes, returning the fragments describing them.
    async fn finish(&mut self) -> Result<Vec<Bytes>>;

    fn abort(&mut self) {}
}

pub type BoxPageSource = Box<dyn UpdatablePageSource + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlySource;

    #[async_trait::async_trait]
    impl UpdatablePageSource for ReadOnlySource {
        async fn finish(&mut self) -> Result<Vec<Bytes>> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    struct MemorySource {
        deleted: usize,
        updated: Vec<String>,
        aborted: bool,
    }

    #[async_trait::async_trait]
    impl UpdatablePageSource for MemorySource {
        async fn delete_rows(&mut self, row_ids: Block) -> Result<()> {
            self.deleted += row_ids.position_count();
            Ok(())
        }

        async fn update_rows(
            &mut self,
            page: Page,
            channels: Vec<usize>,
            updated_columns: Vec<String>,
        ) -> Result<()> {
            anyhow::ensure!(
                channels.len() == updated_columns.len() + 1,
                "expect {} channels, found {}",
                updated_columns.len() + 1,
                channels.len()
            );
            for channel in &channels {
                anyhow::ensure!(page.block(*channel).is_some(), "invalid channel {}", channel);
            }
            self.updated.extend(updated_columns);
            Ok(())
        }

        async fn finish(&mut self) -> Result<Vec<Bytes>> {
            Ok(vec![
                Bytes::from(format!("deleted={}", self.deleted)),
                Bytes::from(format!("updated={}", self.updated.join(","))),
            ])
        }

        fn abort(&mut self) {
            self.aborted = true;
        }
    }

    fn row_ids(count: usize) -> Block {
        Block::new(vec![0u8; count * 8], count)
    }

    #[tokio::test]
    async fn test_unsupported_operations() {
        let mut source: BoxPageSource = Box::new(ReadOnlySource);

        let err = source.delete_rows(row_ids(2)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "This connector does not support row-level delete"
        );

        let page = Page::try_new(vec![row_ids(2)]).unwrap();
        let err = source
            .update_rows(page, vec![0], Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "This connector does not support row update");

        source.abort();
        assert!(source.finish().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_update() {
        let mut source = MemorySource::default();
        source.delete_rows(row_ids(3)).await.unwrap();
        source.delete_rows(row_ids(2)).await.unwrap();

        let page = Page::try_new(vec![Block::new(vec![7u8, 8], 2), row_ids(2)]).unwrap();
        source
            .update_rows(page.clone(), vec![0, 1], vec!["price".to_string()])
            .await
            .unwrap();
        assert!(source
            .update_rows(page, vec![0, 5], vec!["price".to_string()])
            .await
            .is_err());

        assert_eq!(
            source.finish().await.unwrap(),
            vec![
                Bytes::from_static(b"deleted=5"),
                Bytes::from_static(b"updated=price"),
            ]
        );
    }

    #[tokio::test]
    async fn test_abort() {
        let mut source = MemorySource::default();
        source.abort();
        assert!(source.aborted);
    }
}
