//! Core logic for tag-based article search.
//! Loads a static article catalog and filters it by user-selected tags.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use catalog::{
    parse_catalog, CatalogError, CatalogResult, CatalogSource, JsonFileSource, StaticSource,
};
pub use config::{EmptySelectionPolicy, MatchPolicy, PolicyParseError, SearchConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::article::{Article, ArticleId, Catalog, CatalogValidationError};
pub use model::selection::TagSelection;
pub use search::filter::{article_matches, filter_articles};
pub use search::view::{ArticleView, Notice};
pub use service::search_service::{ArticleSearch, CatalogState, SearchError, SearchResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
