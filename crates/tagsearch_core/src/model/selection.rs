//! Tag selection captured from the trigger inputs.
//!
//! # Invariants
//! - A selection never contains blank values.
//! - Values are kept verbatim; tag matching is exact and case-sensitive.

use std::collections::BTreeSet;

/// Set of tags currently chosen by the user.
///
/// Rebuilt on every trigger and discarded after one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: BTreeSet<String>,
}

impl TagSelection {
    /// Builds a selection from tag values, dropping blanks and duplicates.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = values
            .into_iter()
            .map(Into::into)
            .filter(|value: &String| !value.trim().is_empty())
            .collect();
        Self { tags }
    }

    /// Builds a selection from checkbox-style `(value, checked)` inputs.
    ///
    /// Only checked inputs contribute their value.
    pub fn from_checked<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self::new(
            inputs
                .into_iter()
                .filter_map(|(value, checked)| checked.then_some(value)),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::TagSelection;

    #[test]
    fn from_checked_keeps_only_checked_values() {
        let selection =
            TagSelection::from_checked([("rust", true), ("go", false), ("web", true)]);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["rust", "web"]);
    }

    #[test]
    fn blank_and_duplicate_values_are_dropped() {
        let selection = TagSelection::new(["a", "", "  ", "a"]);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("a"));
    }

    #[test]
    fn no_checked_inputs_gives_empty_selection() {
        let selection = TagSelection::from_checked([("a", false)]);
        assert!(selection.is_empty());
    }
}
