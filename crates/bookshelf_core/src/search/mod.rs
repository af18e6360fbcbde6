//! Title search entry points.
//!
//! # Responsibility
//! - Normalize user queries and scan titles for substring matches.
//! - Keep result shaping inside core.

pub mod title;
