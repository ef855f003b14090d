//! Render-ready projections of search outcomes.
//!
//! # Responsibility
//! - Map matched articles to [`ArticleView`] records for an external renderer.
//! - Name the user-facing notices shown instead of a result list.
//!
//! # Invariants
//! - Projection is pure: no markup, no escaping, no I/O.

use crate::model::article::Article;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Everything a renderer needs to paint one search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    /// Detail-page link, `{link_prefix}/{id}`.
    pub link: String,
    pub title: String,
    pub description: String,
    /// Display date string, copied verbatim from the catalog.
    pub date: String,
    /// Tags for badge display, in catalog order.
    pub tags: Vec<String>,
}

impl ArticleView {
    pub fn from_article(article: &Article, link_prefix: &str) -> Self {
        Self {
            link: format!("{link_prefix}/{}", article.id),
            title: article.title.clone(),
            description: article.description.clone(),
            date: article.created_display.clone(),
            tags: article.tags.clone(),
        }
    }
}

/// User-facing notice displayed instead of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Catalog has not arrived yet.
    Loading,
    /// No tag was selected.
    SelectTag,
    /// Catalog could not be loaded; nothing the user can do.
    Unavailable,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Loading => "The article list is still loading. Please wait a moment.",
            Self::SelectTag => "Please select at least one tag.",
            Self::Unavailable => "An error occurred while loading the article list.",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleView;
    use crate::model::article::Article;

    #[test]
    fn view_builds_detail_link_and_copies_display_fields() {
        let article = Article::new(
            "20200101120000",
            "Hello",
            "First post",
            vec!["rust".to_string(), "cli".to_string()],
            "2020年01月01日 12:00",
        );
        let view = ArticleView::from_article(&article, "/articles");
        assert_eq!(view.link, "/articles/20200101120000");
        assert_eq!(view.title, "Hello");
        assert_eq!(view.description, "First post");
        assert_eq!(view.date, "2020年01月01日 12:00");
        assert_eq!(view.tags, vec!["rust", "cli"]);
    }
}
