//! Loading the content collection.
//!
//! The collection is a JSON array of `ContentItem` records, read either over
//! HTTP or from a local file. Callers never see a failed load: any error is
//! logged and replaced by a single placeholder item.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::domain::ContentItem;

/// Errors that can occur while fetching the collection
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the collection comes from
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable location, for logs
    fn describe(&self) -> String;

    /// Fetch and decode the collection
    async fn fetch(&self) -> Result<Vec<ContentItem>, LoadError>;
}

/// Collection served over HTTP(S)
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, timeouts, headers)
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<ContentItem>, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Collection stored in a local JSON file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<ContentItem>, LoadError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(serde_json::from_str(&content)?)
    }
}

/// Pick a source from a location string: `http(s)://` URLs are fetched over
/// the network, anything else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn ContentSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Load the collection, substituting the placeholder item on any failure
#[instrument(skip(source), fields(source = %source.describe()))]
pub async fn load_contents(source: &dyn ContentSource) -> Vec<ContentItem> {
    match source.fetch().await {
        Ok(items) => {
            info!(count = items.len(), "Loaded contents");
            items
        }
        Err(e) => {
            error!(error = %e, "Failed to load contents");
            vec![ContentItem::fallback()]
        }
    }
}
