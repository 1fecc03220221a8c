//! Domain types for the content browser.
//!
//! - ContentItem: one catalog record
//! - Category / CategoryTag / CategoryFilter: category tokens

pub mod item;

pub use item::{Category, CategoryFilter, CategoryTag, ContentItem};
