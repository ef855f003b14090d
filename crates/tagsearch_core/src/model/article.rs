//! Article and catalog domain model.
//!
//! # Responsibility
//! - Define the record shape published in the static search catalog.
//! - Provide catalog-level validation before the catalog is searchable.
//!
//! # Invariants
//! - `id` is non-blank; catalogs may carry it as a JSON string or number.
//! - Repeated ids are tolerated and logged; every record stays displayable.
//! - Catalog order is the publication order and is never changed by core.
//! - The display date is opaque text; core never parses it.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque article identifier used to build detail-page links.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = String;

/// One published article as listed in the search catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Numeric ids are kept as their decimal text.
    #[serde(deserialize_with = "deserialize_article_id")]
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Tag strings; order-insensitive, duplicates carry no meaning.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display-ready creation date. Older catalogs name it `created_date`.
    #[serde(rename = "formatted_created_at", alias = "created_date", default)]
    pub created_display: String,
    /// ISO-8601 creation timestamp, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO-8601 update timestamp, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_updated_at: Option<String>,
    /// Cover image path relative to the article directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Article {
    /// Creates an article with the required display fields and no metadata.
    pub fn new(
        id: impl Into<ArticleId>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        created_display: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags,
            created_display: created_display.into(),
            created_at: None,
            updated_at: None,
            formatted_updated_at: None,
            image: None,
        }
    }

    /// Returns whether this article carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| own == tag)
    }
}

fn deserialize_article_id<'de, D>(deserializer: D) -> Result<ArticleId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Ordered, read-only list of articles loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub articles: Vec<Article>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Validates that every article can be linked.
    ///
    /// Repeated ids are reported with a `warn` event and otherwise accepted.
    ///
    /// # Errors
    /// - [`CatalogValidationError::BlankId`] when an article has no usable id.
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        let mut seen = HashSet::<&str>::with_capacity(self.articles.len());
        for (position, article) in self.articles.iter().enumerate() {
            let id = article.id.trim();
            if id.is_empty() {
                return Err(CatalogValidationError::BlankId { position });
            }
            if !seen.insert(id) {
                warn!(
                    "event=catalog_validate module=model status=warn reason=duplicate_id id={} position={}",
                    id, position
                );
            }
        }
        Ok(())
    }

    /// Returns every distinct non-blank tag in the catalog, sorted.
    pub fn distinct_tags(&self) -> Vec<String> {
        self.articles
            .iter()
            .flat_map(|article| article.tags.iter())
            .filter(|tag| !tag.trim().is_empty())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Catalog invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    BlankId { position: usize },
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId { position } => {
                write!(f, "article at position {position} has a blank id")
            }
        }
    }
}

impl Error for CatalogValidationError {}
