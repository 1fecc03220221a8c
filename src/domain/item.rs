//! Content records and category tokens.

use serde::{Deserialize, Serialize};

/// Coarse genre class used by the category filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drama,
    Movie,
    Game,
    Book,
}

impl Category {
    /// All concrete categories, in filter-bar order
    pub const ALL: [Category; 4] = [
        Category::Drama,
        Category::Movie,
        Category::Game,
        Category::Book,
    ];

    /// Token used in `cat` query parameters and `data-cat` attributes
    pub fn token(&self) -> &'static str {
        match self {
            Category::Drama => "drama",
            Category::Movie => "movie",
            Category::Game => "game",
            Category::Book => "book",
        }
    }

    /// Heading shown on the category page
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Drama => "드라마",
            Category::Movie => "영화",
            Category::Game => "게임",
            Category::Book => "책",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.token())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "drama" => Ok(Category::Drama),
            "movie" => Ok(Category::Movie),
            "game" => Ok(Category::Game),
            "book" => Ok(Category::Book),
            _ => anyhow::bail!("Unknown category: {}", s),
        }
    }
}

/// Category carried by a record.
///
/// Records whose token is not a known category still load; they show up
/// under the "all" filter but never under one of the known category filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryTag {
    Known(Category),
    Other(String),
}

impl CategoryTag {
    /// Raw token as found in the data
    pub fn token(&self) -> &str {
        match self {
            CategoryTag::Known(category) => category.token(),
            CategoryTag::Other(token) => token,
        }
    }
}

impl From<Category> for CategoryTag {
    fn from(category: Category) -> Self {
        CategoryTag::Known(category)
    }
}

impl PartialEq<Category> for CategoryTag {
    fn eq(&self, other: &Category) -> bool {
        matches!(self, CategoryTag::Known(category) if category == other)
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.token())
    }
}

/// Category selection applied to the collection.
///
/// `""` and `"all"` select everything. Any other token that is not a known
/// category is kept as-is and only matches records carrying that exact token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    /// Parse a raw filter token
    pub fn from_token(token: &str) -> Self {
        match token {
            "" | "all" => CategoryFilter::All,
            other => match other.parse::<Category>() {
                Ok(category) => CategoryFilter::Only(category),
                Err(_) => CategoryFilter::Unknown(other.to_string()),
            },
        }
    }

    /// Token as it appears on filter controls (`""` for all)
    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => "",
            CategoryFilter::Only(category) => category.token(),
            CategoryFilter::Unknown(token) => token,
        }
    }

    /// Heading text for this filter; unknown tokens fall back to "all"
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::Only(category) => category.display_name(),
            CategoryFilter::All | CategoryFilter::Unknown(_) => "전체",
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
            CategoryFilter::Unknown(token) => item.category.token() == token,
        }
    }
}

/// One catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier, unique across the collection
    pub id: u64,

    pub title: String,

    pub category: CategoryTag,

    pub year: i32,

    pub genre: String,

    /// Poster image URL
    pub poster: String,

    pub description: String,

    /// Score out of 10
    pub rating: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<String>>,
}

impl ContentItem {
    /// Create an item with only the required fields
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<CategoryTag>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            year,
            genre: genre.into(),
            poster: String::new(),
            description: String::new(),
            rating: 0.0,
            director: None,
            cast: None,
            episodes: None,
            awards: None,
        }
    }

    /// Placeholder shown when the collection cannot be loaded
    pub fn fallback() -> Self {
        Self {
            id: 0,
            title: "샘플 콘텐츠".to_string(),
            category: CategoryTag::Known(Category::Drama),
            year: 2023,
            genre: "드라마".to_string(),
            poster: "https://via.placeholder.com/300x375/667eea/ffffff?text=Sample".to_string(),
            description: "데이터를 불러올 수 없습니다. 네트워크 연결을 확인해주세요.".to_string(),
            rating: 0.0,
            director: None,
            cast: None,
            episodes: None,
            awards: None,
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_cast(mut self, cast: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.cast = Some(cast.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_episodes(mut self, episodes: u32) -> Self {
        self.episodes = Some(episodes);
        self
    }

    pub fn with_awards(mut self, awards: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.awards = Some(awards.into_iter().map(Into::into).collect());
        self
    }

    // An empty director and zero episodes count as absent; lists only when missing.

    pub fn director(&self) -> Option<&str> {
        self.director.as_deref().filter(|d| !d.is_empty())
    }

    pub fn cast(&self) -> Option<&[String]> {
        self.cast.as_deref()
    }

    pub fn episodes(&self) -> Option<u32> {
        self.episodes.filter(|&n| n > 0)
    }

    pub fn awards(&self) -> Option<&[String]> {
        self.awards.as_deref()
    }

    /// Whether any of the optional "additional info" fields is present
    pub fn has_additional_info(&self) -> bool {
        self.director().is_some()
            || self.cast().is_some()
            || self.episodes().is_some()
            || self.awards().is_some()
    }

    /// "year · genre" line used by the hero and cards
    pub fn summary_line(&self) -> String {
        format!("{} · {}", self.year, self.genre)
    }
}
