mod page;
mod page_source;

pub use page::{Block, Page};
pub use page_source::{BoxPageSource, UpdatablePageSource};
