//! Content library: loading and querying the catalog.
//!
//! # Data Layout
//!
//! ```text
//! data/
//! └── contents.json    # JSON array of ContentItem records
//! ```

pub mod catalog;
pub mod loader;

pub use catalog::{filter_by_category, find_by_id, search, Catalog};
pub use loader::{load_contents, source_for, ContentSource, FileSource, HttpSource, LoadError};
