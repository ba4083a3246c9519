//! Record contract shared by every repository implementation.

use std::fmt::Debug;

/// Integer identifier carried by every record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// Plain data holder stored by a repository.
///
/// A record is identified by `id()` and otherwise consists of mutable
/// fields. `Draft` is the record without its identifier; repositories use it
/// when they assign the id themselves.
pub trait Record: Clone + Debug {
    /// Record fields minus the identifier.
    type Draft;

    /// Stable lowercase label used in log events.
    const KIND: &'static str;

    /// Returns the record identifier.
    fn id(&self) -> RecordId;

    /// Builds a full record from an assigned id and its draft fields.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}
