//! Filter/search coordinator.
//!
//! Owns the loaded catalog and the page, and turns UI events (category
//! clicks, keystrokes, clear clicks) into full re-renders. Keystrokes are
//! debounced; category and clear clicks render immediately.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, instrument};

use super::debounce::Debouncer;
use crate::domain::{CategoryFilter, ContentItem};
use crate::library::Catalog;
use crate::page::render;
use crate::page::Page;

/// User interaction on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A category control was clicked
    SelectCategory(String),
    /// The search field now holds this text
    Input(String),
    /// The clear-search control was clicked
    ClearSearch,
}

/// What caused a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTrigger {
    Category,
    Search,
    Clear,
}

/// Emitted after every completed render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNotice {
    pub trigger: RenderTrigger,
    /// Search text the render reflects
    pub query: String,
    /// Number of items in the rendered result set
    pub results: usize,
    pub grid_revision: u64,
}

/// Binds the category controls and the search field to the catalog
#[derive(Debug)]
pub struct Browser {
    catalog: Catalog,
    page: Page,
    filter: CategoryFilter,
    debouncer: Debouncer<String>,
}

impl Browser {
    /// Create a coordinator over an already rendered page
    pub fn new(catalog: Catalog, page: Page, filter: CategoryFilter, debounce: Duration) -> Self {
        Self {
            catalog,
            page,
            filter,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// When the pending search render is due, if one is scheduled
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Items matching the active filter and the current search text
    pub fn results(&self) -> Vec<ContentItem> {
        self.catalog.query(&self.filter, self.page.search_text())
    }

    /// Re-render the current filter and search text
    pub fn refresh(&mut self) -> askama::Result<usize> {
        let results = self.results();
        render::render_results(&mut self.page, &results)?;
        Ok(results.len())
    }

    /// Handle a category click: exclusive activation, re-filter, clear the
    /// search term and re-render
    #[instrument(skip(self))]
    pub fn select_category(&mut self, token: &str) -> askama::Result<RenderNotice> {
        self.page.activate_filter(token);
        self.filter = CategoryFilter::from_token(token);

        self.debouncer.cancel();
        if let Some(input) = self.page.search_input.as_mut() {
            input.value.clear();
        }
        if let Some(clear) = self.page.clear_search.as_mut() {
            clear.visible = false;
        }

        let results = self.refresh()?;

        if self.page.hero.is_none() {
            if let Some(heading) = self.page.title_heading.as_mut() {
                *heading = self.filter.display_name().to_string();
            }
        }

        debug!(results, "Category selected");
        Ok(self.notice(RenderTrigger::Category, results))
    }

    /// Record a keystroke; the render happens on a later `poll`
    pub fn input(&mut self, text: &str, now: Instant) {
        let Some(input) = self.page.search_input.as_mut() else {
            return;
        };
        input.value = text.to_string();
        self.debouncer.push(text.to_string(), now);
    }

    /// Run the pending search render if its debounce window has elapsed
    pub fn poll(&mut self, now: Instant) -> askama::Result<Option<RenderNotice>> {
        if self.debouncer.poll(now).is_none() {
            return Ok(None);
        }
        self.perform_search(RenderTrigger::Search).map(Some)
    }

    /// Empty the search field, restore the unsearched view and refocus
    pub fn clear_search(&mut self) -> askama::Result<RenderNotice> {
        self.debouncer.cancel();
        if let Some(input) = self.page.search_input.as_mut() {
            input.value.clear();
        }

        let notice = self.perform_search(RenderTrigger::Clear)?;

        if let Some(input) = self.page.search_input.as_mut() {
            input.focused = true;
        }
        Ok(notice)
    }

    /// Apply one UI event; returns a notice if it rendered immediately
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> askama::Result<Option<RenderNotice>> {
        match event {
            UiEvent::SelectCategory(token) => self.select_category(&token).map(Some),
            UiEvent::Input(text) => {
                self.input(&text, now);
                Ok(None)
            }
            UiEvent::ClearSearch => self.clear_search().map(Some),
        }
    }

    /// Drive the page from a stream of UI events until the sender side is
    /// dropped. A search still pending at that point is rendered before
    /// returning. Each render is announced on `notices` when given; a failed
    /// render is logged and leaves the region as it was.
    #[instrument(skip_all)]
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<UiEvent>,
        notices: Option<mpsc::Sender<RenderNotice>>,
    ) -> Page {
        loop {
            let deadline = self.debouncer.deadline();

            let rendered = tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event, Instant::now()),
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.poll(Instant::now())
                }
            };
            announce(rendered, notices.as_ref()).await;
        }

        if let Some(deadline) = self.debouncer.deadline() {
            sleep_until(deadline).await;
            let rendered = self.poll(Instant::now());
            announce(rendered, notices.as_ref()).await;
        }

        self.page
    }

    fn perform_search(&mut self, trigger: RenderTrigger) -> askama::Result<RenderNotice> {
        let results = self.refresh()?;
        let has_term = !self.page.search_text().trim().is_empty();
        if let Some(clear) = self.page.clear_search.as_mut() {
            clear.visible = has_term;
        }
        debug!(query = self.page.search_text(), results, "Search rendered");
        Ok(self.notice(trigger, results))
    }

    fn notice(&self, trigger: RenderTrigger, results: usize) -> RenderNotice {
        RenderNotice {
            trigger,
            query: self.page.search_text().to_string(),
            results,
            grid_revision: self.page.grid_revision(),
        }
    }
}

async fn announce(
    rendered: askama::Result<Option<RenderNotice>>,
    notices: Option<&mpsc::Sender<RenderNotice>>,
) {
    match rendered {
        Ok(Some(notice)) => {
            if let Some(tx) = notices {
                let _ = tx.send(notice).await;
            }
        }
        Ok(None) => {}
        Err(e) => error!(error = %e, "Render failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::page::PageKind;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ContentItem::new(1, "Dragon Quest", Category::Game, 1986, "RPG"),
            ContentItem::new(2, "Dr. Romantic", Category::Drama, 2016, "Medical"),
            ContentItem::new(3, "Dune", Category::Book, 1965, "Sci-fi"),
            ContentItem::new(4, "Drama Queen", Category::Drama, 2020, "Comedy"),
        ])
    }

    fn browser(kind: PageKind) -> Browser {
        Browser::new(
            catalog(),
            Page::for_kind(kind),
            CategoryFilter::All,
            Duration::from_millis(300),
        )
    }

    #[test]
    fn test_select_category_clears_search() {
        let mut b = browser(PageKind::Category);
        let now = Instant::now();
        b.input("dr", now);
        b.poll(now + Duration::from_millis(300)).unwrap();
        assert!(b.page().clear_search.as_ref().unwrap().visible);

        let notice = b.select_category("drama").unwrap();
        assert_eq!(notice.results, 2);
        assert_eq!(notice.query, "");
        assert_eq!(b.page().search_text(), "");
        assert!(!b.page().clear_search.as_ref().unwrap().visible);
        assert_eq!(b.page().active_filter(), Some("drama"));
        assert_eq!(b.page().title_heading.as_deref(), Some("드라마"));
    }

    #[test]
    fn test_search_respects_active_category() {
        let mut b = browser(PageKind::Category);
        b.select_category("drama").unwrap();

        let now = Instant::now();
        b.input("dr", now);
        let notice = b.poll(now + Duration::from_millis(300)).unwrap().unwrap();
        assert_eq!(notice.results, 2);

        b.input("queen", now);
        let notice = b.poll(now + Duration::from_millis(300)).unwrap().unwrap();
        assert_eq!(notice.results, 1);
        assert!(b.page().grid_html().contains("Drama Queen"));
    }

    #[test]
    fn test_poll_before_deadline_does_nothing() {
        let mut b = browser(PageKind::Category);
        let now = Instant::now();
        let before = b.page().grid_revision();

        b.input("dune", now);
        assert!(b.poll(now + Duration::from_millis(299)).unwrap().is_none());
        assert_eq!(b.page().grid_revision(), before);
    }

    #[test]
    fn test_clear_search_restores_filtered_view() {
        let mut b = browser(PageKind::Category);
        b.select_category("drama").unwrap();

        let now = Instant::now();
        b.input("queen", now);
        b.poll(now + Duration::from_millis(300)).unwrap();

        let notice = b.clear_search().unwrap();
        assert_eq!(notice.trigger, RenderTrigger::Clear);
        assert_eq!(notice.results, 2);
        let input = b.page().search_input.as_ref().unwrap();
        assert!(input.value.is_empty());
        assert!(input.focused);
        assert!(!b.page().clear_search.as_ref().unwrap().visible);
    }

    #[test]
    fn test_clear_cancels_pending_search() {
        let mut b = browser(PageKind::Category);
        let now = Instant::now();
        b.input("dune", now);
        b.clear_search().unwrap();

        assert!(b.deadline().is_none());
        assert!(b.poll(now + Duration::from_secs(1)).unwrap().is_none());
    }

    #[test]
    fn test_whitespace_query_hides_clear() {
        let mut b = browser(PageKind::Category);
        let now = Instant::now();
        b.input("   ", now);
        let notice = b.poll(now + Duration::from_millis(300)).unwrap().unwrap();
        assert_eq!(notice.results, 4);
        assert!(!b.page().clear_search.as_ref().unwrap().visible);
    }

    #[test]
    fn test_home_category_click_uses_hero() {
        let mut b = browser(PageKind::Home);
        b.select_category("book").unwrap();
        assert_eq!(b.page().hero.as_ref().unwrap().title, "Dune");
        assert!(b.page().grid_html().trim().is_empty());
    }

    #[test]
    fn test_input_without_search_anchor_is_ignored() {
        let mut b = browser(PageKind::Detail);
        let now = Instant::now();
        b.input("dune", now);
        assert!(b.deadline().is_none());
    }
}
