//! Tag matching over catalog articles.
//!
//! # Responsibility
//! - Decide whether one article matches a selection under a [`MatchPolicy`].
//! - Produce the matching subsequence of a catalog.
//!
//! # Invariants
//! - Output keeps catalog order; filtering never reorders.
//! - Neither the articles nor the selection are mutated.
//! - An empty selection matches nothing here; empty-selection policy is
//!   decided by the caller before filtering.

use crate::config::MatchPolicy;
use crate::model::article::Article;
use crate::model::selection::TagSelection;

/// Returns whether `article` matches `selection` under `policy`.
pub fn article_matches(article: &Article, selection: &TagSelection, policy: MatchPolicy) -> bool {
    if selection.is_empty() {
        return false;
    }

    match policy {
        MatchPolicy::Any => article.tags.iter().any(|tag| selection.contains(tag)),
        MatchPolicy::All => selection.iter().all(|tag| article.has_tag(tag)),
    }
}

/// Returns the articles matching `selection`, in their original order.
pub fn filter_articles<'a>(
    articles: &'a [Article],
    selection: &TagSelection,
    policy: MatchPolicy,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| article_matches(article, selection, policy))
        .collect()
}
