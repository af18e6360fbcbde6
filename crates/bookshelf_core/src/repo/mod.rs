//! Catalog store abstractions and implementations.
//!
//! # Responsibility
//! - Define the store contract consumed by the catalog service.
//! - Keep traversal and uniqueness logic out of the service/menu layers.
//!
//! # Invariants
//! - Store APIs return semantic errors (`AlreadyExists`, `NotFound`,
//!   `EmptyCatalog`) instead of panicking.

pub mod book_repo;
