//! Command-line interface for showcase.
//!
//! Provides commands for rendering pages, searching the catalog,
//! replaying UI events against a page, and inspecting configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config;
use crate::core::{open_page, RenderTrigger, UiEvent};
use crate::domain::CategoryFilter;
use crate::library::{load_contents, source_for, Catalog};

/// showcase - Static content catalog browser
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content collection (URL or JSON file); overrides configuration
    #[arg(short, long, global = true, env = "SHOWCASE_DATA")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page and print its HTML
    Render {
        /// Page location, e.g. "/", "category.html?cat=movie", "detail.html?id=3"
        location: String,
    },

    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Category token (drama, movie, game, book, all)
        #[arg(short, long, default_value = "")]
        cat: String,
    },

    /// Replay UI events from stdin against a listing page
    ///
    /// Each line is one event: ":cat TOKEN" clicks a category, ":clear"
    /// clicks the clear control, anything else is typed into the search box.
    Browse {
        /// Page location
        #[arg(default_value = "/")]
        location: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let source = match self.data {
            Some(data) => data,
            None => config::config()?.data_source.clone(),
        };

        match self.command {
            Commands::Render { location } => render_page(&source, &location).await,
            Commands::Search { query, cat } => search_catalog(&source, &query, &cat).await,
            Commands::Browse { location } => browse(&source, &location).await,
            Commands::Config => show_config(&source),
        }
    }
}

/// Render a page and print the document
async fn render_page(source: &str, location: &str) -> Result<()> {
    let debounce = config::config()?.debounce;
    let browser = open_page(&*source_for(source), location, debounce)
        .await
        .with_context(|| format!("Failed to open page: {}", location))?;

    let html = browser.page().to_html().context("Failed to render page")?;
    print!("{}", html);
    Ok(())
}

/// Print matching items as a table
async fn search_catalog(source: &str, query: &str, cat: &str) -> Result<()> {
    let catalog = Catalog::new(load_contents(&*source_for(source)).await);
    let results = catalog.query(&CategoryFilter::from_token(cat), query);

    if results.is_empty() {
        println!("No results for '{}'", query);
        return Ok(());
    }

    println!("{:<6} {:<30} {:<8} {:<6} {:<20}", "ID", "TITLE", "CATEGORY", "YEAR", "GENRE");
    println!("{}", "-".repeat(74));

    for item in &results {
        let title = if item.title.chars().count() > 28 {
            format!("{}...", item.title.chars().take(25).collect::<String>())
        } else {
            item.title.clone()
        };
        println!(
            "{:<6} {:<30} {:<8} {:<6} {:<20}",
            item.id, title, item.category, item.year, item.genre
        );
    }

    println!("\n{} result(s)", results.len());
    Ok(())
}

/// Parse one stdin line into a UI event
fn parse_event(line: &str) -> UiEvent {
    if let Some(token) = line.strip_prefix(":cat") {
        UiEvent::SelectCategory(token.trim().to_string())
    } else if line.trim() == ":clear" {
        UiEvent::ClearSearch
    } else {
        UiEvent::Input(line.to_string())
    }
}

/// Feed stdin lines into the page's event loop and report every render
async fn browse(source: &str, location: &str) -> Result<()> {
    let debounce = config::config()?.debounce;
    let browser = open_page(&*source_for(source), location, debounce)
        .await
        .with_context(|| format!("Failed to open page: {}", location))?;

    let (event_tx, event_rx) = mpsc::channel(64);
    let (notice_tx, mut notice_rx) = mpsc::channel(64);

    let page_task = tokio::spawn(browser.run(event_rx, Some(notice_tx)));

    let printer = tokio::spawn(async move {
        while let Some(notice) = notice_rx.recv().await {
            let trigger = match notice.trigger {
                RenderTrigger::Category => "category",
                RenderTrigger::Search => "search",
                RenderTrigger::Clear => "clear",
            };
            eprintln!(
                "[render #{} {}] query={:?} results={}",
                notice.grid_revision, trigger, notice.query, notice.results
            );
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        if event_tx.send(parse_event(&line)).await.is_err() {
            break;
        }
    }
    drop(event_tx);

    let page = page_task.await.context("Page event loop panicked")?;
    printer.await.context("Notice printer panicked")?;

    let html = page.to_html().context("Failed to render page")?;
    print!("{}", html);
    Ok(())
}

/// Show resolved configuration
fn show_config(source: &str) -> Result<()> {
    let config = config::config()?;

    println!("Data source: {}", source);
    println!("Debounce: {}ms", config.debounce.as_millis());
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }

    Ok(())
}
