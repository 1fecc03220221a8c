//! showcase - Static content catalog browser
//!
//! Loads a JSON content collection once per page, filters it by category,
//! searches it as the user types and renders the result into one of three
//! page layouts: hero plus card grid, card grid only, or a single detail view.
//!
//! # Modules
//!
//! - `domain`: Data structures (ContentItem, Category)
//! - `library`: Loading and querying the collection
//! - `page`: In-memory page anchors and HTML rendering
//! - `core`: Coordinator, debouncing and page initialization
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Render the home page
//! showcase render /
//!
//! # Render a detail page from a remote collection
//! showcase --data https://example.com/data/contents.json render "detail.html?id=3"
//!
//! # Search dramas
//! showcase search love --cat drama
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;
pub mod page;

// Re-export main types at crate root for convenience
pub use crate::core::{Browser, PageRequest, UiEvent};
pub use domain::{Category, CategoryFilter, CategoryTag, ContentItem};
pub use library::{Catalog, ContentSource, LoadError};
pub use page::{Page, PageKind};
