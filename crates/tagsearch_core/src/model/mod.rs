//! Domain model for the article search catalog.
//!
//! # Responsibility
//! - Define the article/catalog records read from the static catalog file.
//! - Define the per-trigger tag selection.
//!
//! # Invariants
//! - Catalog data is read-only once loaded.
//! - Selections are rebuilt on every trigger, never mutated in place.

pub mod article;
pub mod selection;
