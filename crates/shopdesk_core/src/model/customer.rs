//! Customer record.
//!
//! # Invariants
//! - `id` is never changed by repository updates.
//! - `name` and `email` are free text; no format checks are applied.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Customer managed by the console front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Customer fields used when the repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Creates a customer with a caller-provided id.
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Customer {
    type Draft = NewCustomer;

    const KIND: &'static str = "customer";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewCustomer) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }
}

/// Console listing line: `{id}: {name} ({email})`.
impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.name, self.email)
    }
}
