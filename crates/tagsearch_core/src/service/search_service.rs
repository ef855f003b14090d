//! Article search use-case service.
//!
//! # Responsibility
//! - Own the loaded catalog and its readiness state.
//! - Gate filtering on readiness and on the empty-selection policy.
//! - Produce filtered articles and render-ready view records.
//!
//! # Invariants
//! - State moves `Loading -> Ready` or `Loading -> Failed`, exactly once.
//! - No filtering runs unless the state is `Ready`.
//! - Results keep catalog order and are stable across repeated calls.

use crate::catalog::{CatalogError, CatalogSource};
use crate::config::{EmptySelectionPolicy, SearchConfig};
use crate::model::article::{Article, Catalog};
use crate::model::selection::TagSelection;
use crate::search::filter::filter_articles;
use crate::search::view::{ArticleView, Notice};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type SearchResult<T> = Result<T, SearchError>;

/// Search outcomes that replace a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Catalog load failed; terminal for this component.
    CatalogUnavailable(String),
    /// Catalog has not been loaded yet.
    NotReady,
    /// No tags selected under [`EmptySelectionPolicy::Prompt`].
    EmptySelection,
    /// A catalog was already loaded.
    AlreadyLoaded,
}

impl SearchError {
    /// Notice to show the user for this outcome.
    ///
    /// `AlreadyLoaded` is a caller error and has no user-facing notice.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::CatalogUnavailable(_) => Some(Notice::Unavailable),
            Self::NotReady => Some(Notice::Loading),
            Self::EmptySelection => Some(Notice::SelectTag),
            Self::AlreadyLoaded => None,
        }
    }
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogUnavailable(reason) => write!(f, "catalog unavailable: {reason}"),
            Self::NotReady => write!(f, "catalog is still loading"),
            Self::EmptySelection => write!(f, "no tag selected"),
            Self::AlreadyLoaded => write!(f, "catalog already loaded"),
        }
    }
}

impl Error for SearchError {}

impl From<CatalogError> for SearchError {
    fn from(value: CatalogError) -> Self {
        Self::CatalogUnavailable(value.to_string())
    }
}

/// Lifecycle of the catalog owned by [`ArticleSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Ready(Catalog),
    Failed(String),
}

/// Article filter and renderer over one catalog.
#[derive(Debug, Clone)]
pub struct ArticleSearch {
    config: SearchConfig,
    state: CatalogState,
}

impl Default for ArticleSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl ArticleSearch {
    /// Creates a component in the `Loading` state.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: CatalogState::Loading,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, CatalogState::Ready(_))
    }

    /// Stores the catalog and marks the component ready.
    ///
    /// # Errors
    /// - `AlreadyLoaded` when a catalog is already present.
    /// - `CatalogUnavailable` when an earlier load failed.
    pub fn load(&mut self, catalog: Catalog) -> SearchResult<()> {
        self.ensure_loading()?;
        info!(
            "event=catalog_load module=search status=ok articles={}",
            catalog.len()
        );
        self.state = CatalogState::Ready(catalog);
        Ok(())
    }

    /// Fetches from `source` and loads the result.
    ///
    /// A fetch failure moves the component to `Failed` permanently.
    pub fn load_from(&mut self, source: &dyn CatalogSource) -> SearchResult<()> {
        self.ensure_loading()?;

        let started_at = Instant::now();
        match source.fetch() {
            Ok(catalog) => self.load(catalog),
            Err(err) => {
                error!(
                    "event=catalog_load module=search status=error mode={} duration_ms={} error_code={}",
                    source.mode(),
                    started_at.elapsed().as_millis(),
                    err.code()
                );
                let reason = err.to_string();
                self.mark_unavailable(reason.clone());
                Err(SearchError::CatalogUnavailable(reason))
            }
        }
    }

    /// Records a load failure reported by an external loader.
    ///
    /// Has no effect once a catalog is ready.
    pub fn mark_unavailable(&mut self, reason: impl Into<String>) {
        if matches!(self.state, CatalogState::Loading) {
            self.state = CatalogState::Failed(reason.into());
        }
    }

    fn ensure_loading(&self) -> SearchResult<()> {
        match &self.state {
            CatalogState::Loading => Ok(()),
            CatalogState::Ready(_) => {
                warn!("event=catalog_load module=search status=rejected reason=already_loaded");
                Err(SearchError::AlreadyLoaded)
            }
            CatalogState::Failed(reason) => {
                warn!("event=catalog_load module=search status=rejected reason=failed");
                Err(SearchError::CatalogUnavailable(reason.clone()))
            }
        }
    }

    fn catalog(&self) -> SearchResult<&Catalog> {
        match &self.state {
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Loading => Err(SearchError::NotReady),
            CatalogState::Failed(reason) => Err(SearchError::CatalogUnavailable(reason.clone())),
        }
    }

    /// Returns the articles matching `selection`, in catalog order.
    ///
    /// # Errors
    /// - `NotReady` / `CatalogUnavailable` when no catalog is loaded.
    /// - `EmptySelection` when nothing is selected under the prompt policy.
    pub fn filter(&self, selection: &TagSelection) -> SearchResult<Vec<&Article>> {
        let catalog = self.catalog()?;

        if selection.is_empty() {
            return match self.config.empty_selection {
                EmptySelectionPolicy::Prompt => Err(SearchError::EmptySelection),
                EmptySelectionPolicy::ShowAll => Ok(catalog.articles.iter().collect()),
            };
        }

        let started_at = Instant::now();
        let matched = filter_articles(&catalog.articles, selection, self.config.match_policy);
        debug!(
            "event=filter module=search status=ok policy={} selected={} matched={} total={} duration_us={}",
            self.config.match_policy,
            selection.len(),
            matched.len(),
            catalog.len(),
            started_at.elapsed().as_micros()
        );
        Ok(matched)
    }

    /// Filters and projects the matches into view records.
    pub fn search(&self, selection: &TagSelection) -> SearchResult<Vec<ArticleView>> {
        let prefix = self.config.link_prefix.as_str();
        Ok(self
            .filter(selection)?
            .into_iter()
            .map(|article| ArticleView::from_article(article, prefix))
            .collect())
    }

    /// Returns every distinct tag in the loaded catalog, sorted.
    pub fn available_tags(&self) -> SearchResult<Vec<String>> {
        Ok(self.catalog()?.distinct_tags())
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleSearch, CatalogState, SearchError};
    use crate::catalog::StaticSource;
    use crate::model::article::{Article, Catalog};
    use crate::model::selection::TagSelection;
    use crate::search::view::Notice;

    fn catalog() -> Catalog {
        Catalog::new(vec![Article::new(
            "1",
            "one",
            "",
            vec!["a".to_string()],
            "",
        )])
    }

    #[test]
    fn starts_loading_and_refuses_to_filter() {
        let search = ArticleSearch::default();
        assert!(!search.is_ready());
        let err = search.filter(&TagSelection::new(["a"])).unwrap_err();
        assert_eq!(err, SearchError::NotReady);
        assert_eq!(err.notice(), Some(Notice::Loading));
    }

    #[test]
    fn mark_unavailable_is_ignored_after_ready() {
        let mut search = ArticleSearch::default();
        search.load(catalog()).unwrap();
        search.mark_unavailable("late failure");
        assert!(search.is_ready());
    }

    #[test]
    fn failed_source_reason_is_reported_once() {
        let mut search = ArticleSearch::default();
        let err = search
            .load_from(&StaticSource::new("not json"))
            .unwrap_err();
        let SearchError::CatalogUnavailable(reason) = &err else {
            panic!("expected CatalogUnavailable, got {err:?}");
        };
        assert!(reason.starts_with("malformed catalog json"));

        let later = search.filter(&TagSelection::new(["a"])).unwrap_err();
        assert_eq!(later, err);
        assert_eq!(later.to_string().matches("catalog unavailable").count(), 1);
    }

    #[test]
    fn load_after_failure_is_rejected() {
        let mut search = ArticleSearch::default();
        search.mark_unavailable("offline");
        let err = search.load(catalog()).unwrap_err();
        assert_eq!(err, SearchError::CatalogUnavailable("offline".to_string()));
        assert_eq!(search.state(), &CatalogState::Failed("offline".to_string()));
    }
}
