//! Packs a directory tree into one Markdown document: every file that
//! survives the ignore rules becomes a `# <path>` section with its content
//! in a fenced block, or a placeholder line when it is not text.

pub mod app;

pub use app::aggregator::aggregate;
pub use app::error::{DigestError, Result};
pub use app::ignore_rules::{IgnoreResolver, DEFAULT_IGNORES, IGNORE_FILE_NAME};
pub use app::models::{AggregationConfig, AggregationSummary, FileEntry};
