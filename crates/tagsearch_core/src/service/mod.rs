//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog loading, filtering and projection into one component.
//! - Keep loader/trigger/renderer collaborators decoupled from search rules.

pub mod search_service;
