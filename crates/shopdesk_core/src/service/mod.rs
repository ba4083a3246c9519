//! Use-case services.
//!
//! # Responsibility
//! - Expose domain-oriented operation names over repository calls.
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - Services hold no state besides their repository.
//! - Not-found outcomes propagate unchanged; no service-level error type.

pub mod customer_service;
pub mod product_service;
