//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog store calls into use-case level APIs.
//! - Keep the menu layer decoupled from store traversal details.

pub mod catalog_service;
