//! Search behavior configuration.
//!
//! # Responsibility
//! - Choose how multiple selected tags combine (`MatchPolicy`).
//! - Choose what an empty selection means (`EmptySelectionPolicy`).
//! - Hold the detail-link prefix used by view projection.
//!
//! # Invariants
//! - Defaults match the shipped widget: any-match, prompt on empty selection,
//!   links under `/articles`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_LINK_PREFIX: &str = "/articles";

/// How the selected tags combine when matching an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Article shares at least one tag with the selection.
    #[default]
    Any,
    /// Article carries every selected tag.
    All,
}

/// Outcome of a search with no tags selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySelectionPolicy {
    /// Refuse to filter and ask the user to pick a tag.
    #[default]
    Prompt,
    /// Return the whole catalog unfiltered.
    ShowAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub match_policy: MatchPolicy,
    pub empty_selection: EmptySelectionPolicy,
    /// Prefix joined with `/{id}` to form detail links. No trailing slash.
    pub link_prefix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            empty_selection: EmptySelectionPolicy::default(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    pub fn with_empty_selection(mut self, policy: EmptySelectionPolicy) -> Self {
        self.empty_selection = policy;
        self
    }

    /// Sets the link prefix, trimming whitespace and trailing slashes.
    pub fn with_link_prefix(mut self, prefix: &str) -> Self {
        self.link_prefix = prefix.trim().trim_end_matches('/').to_string();
        self
    }
}

/// Unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl Display for PolicyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} `{}`; expected {}",
            self.kind, self.value, self.expected
        )
    }
}

impl Error for PolicyParseError {}

impl FromStr for MatchPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "union" | "or" => Ok(Self::Any),
            "all" | "intersection" | "and" => Ok(Self::All),
            other => Err(PolicyParseError {
                kind: "match policy",
                value: other.to_string(),
                expected: "any|all",
            }),
        }
    }
}

impl FromStr for EmptySelectionPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "show-all" | "show_all" | "all" => Ok(Self::ShowAll),
            other => Err(PolicyParseError {
                kind: "empty-selection policy",
                value: other.to_string(),
                expected: "prompt|show-all",
            }),
        }
    }
}

impl Display for MatchPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Any => "any",
            Self::All => "all",
        })
    }
}

impl Display for EmptySelectionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Prompt => "prompt",
            Self::ShowAll => "show-all",
        })
    }
}
