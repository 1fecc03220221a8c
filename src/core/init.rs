//! Page initialization.
//!
//! Resolves the page layout and initial state from the URL, performs the
//! first render and hands back a wired coordinator.

use std::time::Duration;

use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

use super::browser::Browser;
use crate::domain::{CategoryFilter, ContentItem};
use crate::library::{load_contents, Catalog, ContentSource};
use crate::page::{render, Page, PageKind};

/// Document title used by listing pages
pub const SITE_TITLE: &str = "Showcase";

/// Base used to resolve relative page locations such as `detail.html?id=3`
const BASE_URL: &str = "http://localhost/";

/// Failure to bring up a page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Invalid page location: {0}")]
    Location(#[from] url::ParseError),

    #[error("Render failed: {0}")]
    Render(#[from] askama::Error),
}

/// Initial state requested by a page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub kind: PageKind,
    /// `id` parameter; `None` when missing or not a number
    pub id: Option<u64>,
    /// `cat` parameter; empty when missing
    pub category: String,
}

impl PageRequest {
    /// Parse an absolute or site-relative page location. A repeated
    /// parameter resolves to its first occurrence.
    pub fn parse(location: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(BASE_URL)?;
        let url = base.join(location)?;

        let first = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        Ok(Self {
            kind: PageKind::from_path(url.path()),
            id: first("id").and_then(|id| id.trim().parse::<u64>().ok()),
            category: first("cat").unwrap_or_default(),
        })
    }
}

/// Outcome of a detail-page lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Found(&'a ContentItem),
    NotFound,
}

/// Resolve a detail `id` against the catalog
pub fn resolve_detail(catalog: &Catalog, id: Option<u64>) -> DetailView<'_> {
    match id.and_then(|id| catalog.get(id)) {
        Some(item) => DetailView::Found(item),
        None => DetailView::NotFound,
    }
}

/// Build the page for `request`, render it and wire up the coordinator
#[instrument(skip(catalog), fields(items = catalog.len()))]
pub fn initialize(
    catalog: Catalog,
    request: &PageRequest,
    debounce: Duration,
) -> askama::Result<Browser> {
    let mut page = Page::for_kind(request.kind);
    let filter = CategoryFilter::from_token(&request.category);

    match request.kind {
        PageKind::Detail => match resolve_detail(&catalog, request.id) {
            DetailView::Found(item) => {
                info!(id = item.id, title = %item.title, "Rendering detail");
                render::render_detail(&mut page, item)?;
            }
            DetailView::NotFound => {
                warn!(id = ?request.id, "Content not found");
                render::render_not_found(&mut page)?;
            }
        },
        PageKind::Home | PageKind::Category => {
            page.activate_filter(filter.token());
            if let Some(heading) = page.title_heading.as_mut() {
                *heading = filter.display_name().to_string();
            }
            page.document_title = SITE_TITLE.to_string();

            let results = catalog.query(&filter, "");
            render::render_results(&mut page, &results)?;
            info!(results = results.len(), category = filter.token(), "Rendered listing");
        }
    }

    Ok(Browser::new(catalog, page, filter, debounce))
}

/// Load the collection from `source` and initialize the page at `location`
pub async fn open_page(
    source: &dyn ContentSource,
    location: &str,
    debounce: Duration,
) -> Result<Browser, PageError> {
    let request = PageRequest::parse(location)?;
    let catalog = Catalog::new(load_contents(source).await);
    Ok(initialize(catalog, &request, debounce)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_parse_detail_request() {
        let request = PageRequest::parse("detail.html?id=42").unwrap();
        assert_eq!(request.kind, PageKind::Detail);
        assert_eq!(request.id, Some(42));
    }

    #[test]
    fn test_parse_non_numeric_id() {
        let request = PageRequest::parse("/detail.html?id=abc").unwrap();
        assert_eq!(request.id, None);

        let request = PageRequest::parse("/detail.html").unwrap();
        assert_eq!(request.id, None);
    }

    #[test]
    fn test_parse_listing_request() {
        let request = PageRequest::parse("https://site.example/category.html?cat=movie").unwrap();
        assert_eq!(request.kind, PageKind::Category);
        assert_eq!(request.category, "movie");

        let request = PageRequest::parse("/").unwrap();
        assert_eq!(request.kind, PageKind::Home);
        assert_eq!(request.category, "");
    }

    #[test]
    fn test_repeated_params_use_first_occurrence() {
        let request = PageRequest::parse("detail.html?id=abc&id=5").unwrap();
        assert_eq!(request.id, None);

        let request = PageRequest::parse("detail.html?id=3&id=5").unwrap();
        assert_eq!(request.id, Some(3));

        let request = PageRequest::parse("category.html?cat=&cat=movie").unwrap();
        assert_eq!(request.category, "");

        let request = PageRequest::parse("category.html?cat=book&cat=movie").unwrap();
        assert_eq!(request.category, "book");
    }

    #[test]
    fn test_resolve_detail() {
        let catalog = Catalog::new(vec![ContentItem::new(
            5,
            "Kingdom",
            Category::Drama,
            2019,
            "Zombie",
        )]);

        assert!(matches!(resolve_detail(&catalog, Some(5)), DetailView::Found(i) if i.id == 5));
        assert_eq!(resolve_detail(&catalog, Some(999)), DetailView::NotFound);
        assert_eq!(resolve_detail(&catalog, None), DetailView::NotFound);
    }
}
