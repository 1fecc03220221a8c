//! HTML rendering into page anchors.
//!
//! Markup lives in askama templates under `templates/`; interpolated text is
//! escaped by the templates. Every render fully replaces the target region,
//! there is no diffing.

use askama::Template;
use tracing::debug;

use super::Page;
use crate::domain::{CategoryFilter, ContentItem};

/// Document title of a detail page without a resolved item
pub const DETAIL_TITLE: &str = "상세 정보";

struct CardView<'a> {
    href: String,
    poster: &'a str,
    title: &'a str,
    meta: String,
}

/// Grid content: one card per item
#[derive(Template)]
#[template(path = "partials/cards.html")]
struct CardsTemplate<'a> {
    cards: Vec<CardView<'a>>,
}

/// Detail view: poster, title, meta line, description and the
/// additional-info block when any optional field is present
#[derive(Template)]
#[template(path = "partials/detail.html")]
struct DetailTemplate<'a> {
    poster: &'a str,
    title: &'a str,
    year: i32,
    genre: &'a str,
    rating: f64,
    description: &'a str,
    has_additional_info: bool,
    director: Option<&'a str>,
    cast: Option<&'a str>,
    episodes: Option<u32>,
    awards: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "partials/not_found.html")]
struct NotFoundTemplate;

#[derive(Clone, Copy)]
struct HeroView<'a> {
    background_image: Option<&'a str>,
    title: &'a str,
    meta: &'a str,
}

struct ButtonView<'a> {
    token: &'a str,
    label: &'static str,
    active: bool,
}

#[derive(Clone, Copy)]
struct SearchView<'a> {
    value: &'a str,
    has_clear: bool,
    clear_visible: bool,
}

/// Whole page document
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    heading: Option<&'a str>,
    hero: Option<HeroView<'a>>,
    buttons: Vec<ButtonView<'a>>,
    search: Option<SearchView<'a>>,
    grid: Option<&'a str>,
    detail: Option<&'a str>,
}

/// Link to an item's detail page
pub fn detail_href(item: &ContentItem) -> String {
    format!("detail.html?id={}", item.id)
}

/// Grid markup for a list of items
pub fn cards_html(items: &[ContentItem]) -> askama::Result<String> {
    let cards = items
        .iter()
        .map(|item| CardView {
            href: detail_href(item),
            poster: &item.poster,
            title: &item.title,
            meta: item.summary_line(),
        })
        .collect();

    CardsTemplate { cards }.render()
}

/// Detail markup for one item
pub fn detail_html(item: &ContentItem) -> askama::Result<String> {
    let cast = item.cast().map(|cast| cast.join(", "));
    let awards = item.awards().map(|awards| awards.join(", "));

    DetailTemplate {
        poster: &item.poster,
        title: &item.title,
        year: item.year,
        genre: &item.genre,
        rating: item.rating,
        description: &item.description,
        has_additional_info: item.has_additional_info(),
        director: item.director(),
        cast: cast.as_deref(),
        episodes: item.episodes(),
        awards: awards.as_deref(),
    }
    .render()
}

/// Point the hero banner at `item`
pub fn render_hero(page: &mut Page, item: &ContentItem) {
    let Some(hero) = page.hero.as_mut() else {
        return;
    };
    hero.background_image = Some(item.poster.clone());
    hero.title = item.title.clone();
    hero.meta = item.summary_line();
    hero.revision += 1;
}

/// Replace the grid with one card per item
pub fn render_cards(page: &mut Page, items: &[ContentItem]) -> askama::Result<()> {
    let Some(grid) = page.card_grid.as_mut() else {
        return Ok(());
    };
    grid.replace(cards_html(items)?);
    debug!(cards = items.len(), revision = grid.revision, "Rendered card grid");
    Ok(())
}

/// Render a result set in whichever listing mode the page supports.
///
/// With a hero the first item goes to the banner and the rest to the grid;
/// an empty set clears the grid and leaves the hero as it was.
pub fn render_results(page: &mut Page, items: &[ContentItem]) -> askama::Result<()> {
    if page.hero.is_none() {
        return render_cards(page, items);
    }

    match items.split_first() {
        Some((first, rest)) => {
            render_hero(page, first);
            render_cards(page, rest)
        }
        None => render_cards(page, &[]),
    }
}

/// Render a resolved item into the detail container and retitle the page
pub fn render_detail(page: &mut Page, item: &ContentItem) -> askama::Result<()> {
    page.document_title = format!("{} - {}", item.title, DETAIL_TITLE);
    if let Some(detail) = page.detail.as_mut() {
        detail.replace(detail_html(item)?);
    }
    Ok(())
}

/// Render the lookup-failure message
pub fn render_not_found(page: &mut Page) -> askama::Result<()> {
    page.document_title = DETAIL_TITLE.to_string();
    if let Some(detail) = page.detail.as_mut() {
        detail.replace(NotFoundTemplate.render()?);
    }
    Ok(())
}

/// Serialize the whole page as a standalone document
pub fn document(page: &Page) -> askama::Result<String> {
    let buttons = page
        .filter_buttons
        .iter()
        .map(|button| ButtonView {
            token: &button.token,
            label: CategoryFilter::from_token(&button.token).display_name(),
            active: button.active,
        })
        .collect();

    PageTemplate {
        title: &page.document_title,
        heading: page.title_heading.as_deref(),
        hero: page.hero.as_ref().map(|hero| HeroView {
            background_image: hero.background_image.as_deref(),
            title: &hero.title,
            meta: &hero.meta,
        }),
        buttons,
        search: page.search_input.as_ref().map(|input| SearchView {
            value: &input.value,
            has_clear: page.clear_search.is_some(),
            clear_visible: page.clear_search.as_ref().is_some_and(|c| c.visible),
        }),
        grid: page.card_grid.as_ref().map(|grid| grid.html.as_str()),
        detail: page.detail.as_ref().map(|detail| detail.html.as_str()),
    }
    .render()
}
