//! Domain records managed by shopdesk repositories.
//!
//! # Responsibility
//! - Define the plain data holders for customers and products.
//! - Define the `Record` contract repositories are generic over.
//!
//! # Invariants
//! - Every record carries an integer `RecordId`.
//! - Id uniqueness is not enforced by the model; repositories accept
//!   duplicates and resolve them by insertion order.

pub mod customer;
pub mod product;
pub mod record;
