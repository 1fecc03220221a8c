//! Page Integration Tests
//!
//! Tests for page initialization, detail lookup and listing renders.

use std::time::Duration;

use showcase::core::{initialize, resolve_detail, DetailView, PageRequest};
use showcase::domain::{Category, ContentItem};
use showcase::library::Catalog;

const DEBOUNCE: Duration = Duration::from_millis(300);
const NOT_FOUND: &str = r#"<div class="error">콘텐츠를 찾을 수 없습니다.</div>"#;

fn catalog() -> Catalog {
    Catalog::new(vec![
        ContentItem::new(1, "Crash Landing on You", Category::Drama, 2019, "Romance")
            .with_poster("https://img.example/1.jpg")
            .with_description("A paraglider lands in North Korea")
            .with_rating(8.7)
            .with_director("Lee Jeong-hyo")
            .with_cast(["Hyun Bin", "Son Ye-jin"])
            .with_episodes(16),
        ContentItem::new(2, "Burning", Category::Movie, 2018, "Mystery")
            .with_poster("https://img.example/2.jpg")
            .with_rating(7.5)
            .with_awards(["FIPRESCI Prize"]),
        ContentItem::new(3, "The Vegetarian", Category::Book, 2007, "Novel")
            .with_poster("https://img.example/3.jpg")
            .with_description("A woman stops eating meat")
            .with_rating(8.0),
        ContentItem::new(4, "Sky Castle", Category::Drama, 2018, "Satire")
            .with_poster("https://img.example/4.jpg"),
        ContentItem::new(5, "Black Desert", Category::Game, 2015, "MMORPG")
            .with_poster("https://img.example/5.jpg"),
    ])
}

#[test]
fn test_detail_absent_id_is_not_found() {
    let catalog = catalog();
    assert_eq!(resolve_detail(&catalog, Some(999)), DetailView::NotFound);

    let request = PageRequest::parse("detail.html?id=999").unwrap();
    let browser = initialize(catalog, &request, DEBOUNCE).unwrap();
    let page = browser.page();

    assert!(page.detail.as_ref().unwrap().html.contains(NOT_FOUND));
    assert_eq!(page.document_title, "상세 정보");
}

#[test]
fn test_detail_garbage_id_is_not_found() {
    let request = PageRequest::parse("detail.html?id=three").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    assert!(browser.page().detail.as_ref().unwrap().html.contains(NOT_FOUND));
}

#[test]
fn test_detail_found() {
    let request = PageRequest::parse("/detail.html?id=1").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    let page = browser.page();
    let html = &page.detail.as_ref().unwrap().html;

    assert_eq!(page.document_title, "Crash Landing on You - 상세 정보");
    assert!(html.contains(r#"<img src="https://img.example/1.jpg" alt="Crash Landing on You" class="detail-image">"#));
    assert!(html.contains("<span>2019</span> · <span>Romance</span> · <span>평점: 8.7/10</span>"));
    assert!(html.contains("<p>A paraglider lands in North Korea</p>"));
    assert!(html.contains("<strong>출연:</strong> Hyun Bin, Son Ye-jin"));
    assert!(html.contains("<strong>에피소드:</strong> 16화"));
    assert!(!html.contains("수상"));
}

#[test]
fn test_detail_without_optionals_has_no_additional_info() {
    let request = PageRequest::parse("detail.html?id=3").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    let html = &browser.page().detail.as_ref().unwrap().html;

    assert!(html.contains("The Vegetarian"));
    assert!(!html.contains("additional-info"));
}

#[test]
fn test_home_page_hero_and_grid() {
    let request = PageRequest::parse("/index.html").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    let page = browser.page();

    let hero = page.hero.as_ref().unwrap();
    assert_eq!(hero.title, "Crash Landing on You");
    assert_eq!(hero.meta, "2019 · Romance");
    assert_eq!(page.grid_html().matches(r#"class="card""#).count(), 4);
    assert!(page.grid_html().contains(r#"href="detail.html?id=5""#));
    assert_eq!(page.active_filter(), Some(""));
}

#[test]
fn test_category_page_from_query() {
    let request = PageRequest::parse("category.html?cat=drama").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    let page = browser.page();

    assert!(page.hero.is_none());
    assert_eq!(page.title_heading.as_deref(), Some("드라마"));
    assert_eq!(page.active_filter(), Some("drama"));
    assert_eq!(page.grid_html().matches(r#"class="card""#).count(), 2);
    assert!(page.grid_html().contains("Sky Castle"));
    assert!(!page.grid_html().contains("Burning"));
}

#[test]
fn test_unknown_category_renders_empty_grid() {
    let request = PageRequest::parse("category.html?cat=anime").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    let page = browser.page();

    assert!(page.grid_html().trim().is_empty());
    assert_eq!(page.title_heading.as_deref(), Some("전체"));
    assert_eq!(page.active_filter(), None);
}

#[test]
fn test_category_click_on_listing_page() {
    let request = PageRequest::parse("category.html").unwrap();
    let mut browser = initialize(catalog(), &request, DEBOUNCE).unwrap();

    let notice = browser.select_category("game").unwrap();
    assert_eq!(notice.results, 1);
    assert_eq!(browser.page().title_heading.as_deref(), Some("게임"));
    assert!(browser.page().grid_html().contains("Black Desert"));

    browser.select_category("").unwrap();
    assert_eq!(browser.page().title_heading.as_deref(), Some("전체"));
    assert_eq!(browser.page().grid_html().matches(r#"class="card""#).count(), 5);
}

#[test]
fn test_page_document_html() {
    let request = PageRequest::parse("category.html?cat=movie").unwrap();
    let browser = initialize(catalog(), &request, DEBOUNCE).unwrap();
    let html = browser.page().to_html().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<h1 id="pageTitleHeading">영화</h1>"#));
    assert!(html.contains(r#"<button class="filter-btn active" data-cat="movie">영화</button>"#));
    assert!(html.contains("Burning"));
}
