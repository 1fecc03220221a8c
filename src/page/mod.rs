//! In-memory page document.
//!
//! A page exposes a fixed set of optional anchors (hero, card grid, detail
//! container, search controls, filter buttons, title heading). Render paths
//! whose anchor is missing are silently skipped.

pub mod render;

use crate::domain::{Category, CategoryFilter};

/// Page layout, resolved from the URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Hero banner plus card grid
    Home,
    /// Grid only, with a category heading
    Category,
    /// Single item view
    Detail,
}

impl PageKind {
    /// Resolve the layout from a URL path
    pub fn from_path(path: &str) -> Self {
        if path.contains("detail.html") {
            PageKind::Detail
        } else if path.contains("category.html") {
            PageKind::Category
        } else {
            PageKind::Home
        }
    }
}

/// Hero banner anchor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hero {
    pub background_image: Option<String>,
    pub title: String,
    pub meta: String,
    pub revision: u64,
}

/// Container whose content is fully replaced on every render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub html: String,
    pub revision: u64,
}

impl Container {
    /// Replace the rendered content
    pub fn replace(&mut self, html: String) {
        self.html = html;
        self.revision += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClearButton {
    pub visible: bool,
}

/// Category filter control tagged with its token
#[derive(Debug, Clone, PartialEq)]
pub struct FilterButton {
    pub token: String,
    pub active: bool,
}

impl FilterButton {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            active: false,
        }
    }
}

/// Rendered document state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub hero: Option<Hero>,
    pub card_grid: Option<Container>,
    pub detail: Option<Container>,
    pub search_input: Option<SearchInput>,
    pub clear_search: Option<ClearButton>,
    pub filter_buttons: Vec<FilterButton>,
    pub title_heading: Option<String>,
    pub document_title: String,
}

impl Page {
    /// Build the empty anchor skeleton for a layout
    pub fn for_kind(kind: PageKind) -> Self {
        match kind {
            PageKind::Detail => Self {
                detail: Some(Container::default()),
                ..Self::default()
            },
            PageKind::Home => Self {
                hero: Some(Hero::default()),
                card_grid: Some(Container::default()),
                ..Self::listing_controls()
            },
            PageKind::Category => Self {
                card_grid: Some(Container::default()),
                title_heading: Some(CategoryFilter::All.display_name().to_string()),
                ..Self::listing_controls()
            },
        }
    }

    fn listing_controls() -> Self {
        let mut buttons = vec![FilterButton::new("")];
        buttons.extend(Category::ALL.iter().map(|c| FilterButton::new(c.token())));

        Self {
            search_input: Some(SearchInput::default()),
            clear_search: Some(ClearButton::default()),
            filter_buttons: buttons,
            ..Self::default()
        }
    }

    /// Mark the button with `token` active and every other one inactive.
    /// Returns false if no button carries the token.
    pub fn activate_filter(&mut self, token: &str) -> bool {
        let found = self.filter_buttons.iter().any(|b| b.token == token);
        if found {
            for button in &mut self.filter_buttons {
                button.active = button.token == token;
            }
        }
        found
    }

    /// Token of the active filter button, if any
    pub fn active_filter(&self) -> Option<&str> {
        self.filter_buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.token.as_str())
    }

    /// Current search text ("" when the page has no search input)
    pub fn search_text(&self) -> &str {
        self.search_input
            .as_ref()
            .map(|input| input.value.as_str())
            .unwrap_or("")
    }

    /// Grid HTML ("" when the page has no grid)
    pub fn grid_html(&self) -> &str {
        self.card_grid.as_ref().map(|g| g.html.as_str()).unwrap_or("")
    }

    /// Number of full grid redraws so far
    pub fn grid_revision(&self) -> u64 {
        self.card_grid.as_ref().map(|g| g.revision).unwrap_or(0)
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> askama::Result<String> {
        render::document(self)
    }
}
