//! In-memory catalog of content items.
//!
//! Loaded once per page and never mutated afterwards. Filtering and search
//! return borrowed slices when no narrowing happens so callers can tell
//! "unchanged" apart from "copied".

use std::borrow::Cow;
use std::sync::Arc;

use crate::domain::{CategoryFilter, ContentItem};

/// Immutable collection shared by every render path of a page
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[ContentItem]>,
}

impl Catalog {
    /// Wrap a loaded collection
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// All items, in source order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Get an item by ID
    pub fn get(&self, id: u64) -> Option<&ContentItem> {
        find_by_id(&self.items, id)
    }

    /// Apply the category filter, then the search query
    pub fn query(&self, filter: &CategoryFilter, term: &str) -> Vec<ContentItem> {
        let filtered = filter_by_category(&self.items, filter);
        search(&filtered, term).into_owned()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

impl From<Vec<ContentItem>> for Catalog {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}

/// Keep the items of one category, preserving order.
///
/// `CategoryFilter::All` hands back the input slice untouched.
pub fn filter_by_category<'a>(
    items: &'a [ContentItem],
    filter: &CategoryFilter,
) -> Cow<'a, [ContentItem]> {
    match filter {
        CategoryFilter::All => Cow::Borrowed(items),
        _ => Cow::Owned(
            items
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect(),
        ),
    }
}

/// Case-insensitive substring search over title, genre and description.
///
/// A blank query is a no-op and returns the input slice untouched.
pub fn search<'a>(items: &'a [ContentItem], query: &str) -> Cow<'a, [ContentItem]> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Cow::Borrowed(items);
    }

    Cow::Owned(
        items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&query_lower)
                    || item.genre.to_lowercase().contains(&query_lower)
                    || item.description.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect(),
    )
}

/// Exact ID lookup
pub fn find_by_id(items: &[ContentItem], id: u64) -> Option<&ContentItem> {
    items.iter().find(|item| item.id == id)
}
