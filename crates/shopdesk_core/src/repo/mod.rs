//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the identifier-keyed CRUD contract shared by all records.
//! - Isolate SQLite query details from service/presentation code.
//!
//! # Invariants
//! - Not-found is never an error at this layer.
//! - In-memory and SQLite implementations are observably equivalent for
//!   ordering, duplicates and first-match semantics.

pub mod record_repo;
pub mod sqlite_repo;
