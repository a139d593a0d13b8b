//! Content rendering and blog metadata

mod markdown;
mod summary;

pub use markdown::MarkdownRenderer;
pub use summary::{default_summaries, find_summary, PostSummary};
