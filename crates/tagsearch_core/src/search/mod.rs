//! Tag search primitives.
//!
//! # Responsibility
//! - Match articles against a tag selection.
//! - Shape matches into render-ready view records and notices.

pub mod filter;
pub mod view;
