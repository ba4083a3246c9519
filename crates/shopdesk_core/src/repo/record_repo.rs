//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide identifier-keyed CRUD over an insertion-ordered collection.
//! - Keep storage details behind one trait shared by every backend.
//!
//! # Invariants
//! - `get_all` preserves insertion order.
//! - Duplicate ids are accepted by `add`; keyed operations resolve to the
//!   first match in insertion order.
//! - A missing id is never an error: lookups return `None`, writes return
//!   `WriteOutcome::Missing` and leave the collection unchanged.
//! - `add_new` assigns ids strictly greater than every id seen so far.

use crate::db::DbError;
use crate::model::record::{Record, RecordId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for storage failures.
///
/// Not-found conditions are not represented here.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    IdSpaceExhausted,
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::IdSpaceExhausted => write!(f, "no record ids left to assign"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::IdSpaceExhausted
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of a keyed write (`update`/`delete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A matching record was found and changed.
    Applied,
    /// No record had the requested id; nothing changed.
    Missing,
}

impl WriteOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Repository interface for record CRUD operations.
pub trait Repository<T: Record> {
    /// Returns every record in insertion order.
    fn get_all(&self) -> RepoResult<Vec<T>>;

    /// Returns the first record whose id matches, scanning in insertion order.
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<T>>;

    /// Appends a record with a caller-supplied id. Duplicates are accepted.
    fn add(&mut self, record: T) -> RepoResult<()>;

    /// Assigns a fresh id to `draft`, appends it and returns the stored record.
    fn add_new(&mut self, draft: T::Draft) -> RepoResult<T>;

    /// Replaces the first record with `record.id` wholesale.
    fn update(&mut self, record: T) -> RepoResult<WriteOutcome>;

    /// Removes the first record with `id`.
    fn delete(&mut self, id: RecordId) -> RepoResult<WriteOutcome>;
}

impl<T: Record, R: Repository<T> + ?Sized> Repository<T> for Box<R> {
    fn get_all(&self) -> RepoResult<Vec<T>> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<T>> {
        (**self).get_by_id(id)
    }

    fn add(&mut self, record: T) -> RepoResult<()> {
        (**self).add(record)
    }

    fn add_new(&mut self, draft: T::Draft) -> RepoResult<T> {
        (**self).add_new(draft)
    }

    fn update(&mut self, record: T) -> RepoResult<WriteOutcome> {
        (**self).update(record)
    }

    fn delete(&mut self, id: RecordId) -> RepoResult<WriteOutcome> {
        (**self).delete(id)
    }
}

/// Process-local repository backed by an insertion-ordered `Vec`.
///
/// Keyed operations are linear scans. Never returns an error except when the
/// id space is exhausted in `add_new`.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
    last_assigned: RecordId,
}

impl<T: Record> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            last_assigned: 0,
        }
    }

    /// Creates a repository pre-populated in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records,
            last_assigned: 0,
        }
    }

    /// Borrowed view of the stored records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn next_id(&self) -> RepoResult<RecordId> {
        let highest_stored = self
            .records
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(0);
        highest_stored
            .max(self.last_assigned)
            .checked_add(1)
            .ok_or(RepoError::IdSpaceExhausted)
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> RepoResult<Vec<T>> {
        Ok(self.records.clone())
    }

    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<T>> {
        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }

    fn add(&mut self, record: T) -> RepoResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn add_new(&mut self, draft: T::Draft) -> RepoResult<T> {
        let id = self.next_id()?;
        let record = T::from_draft(id, draft);
        self.records.push(record.clone());
        self.last_assigned = id;
        Ok(record)
    }

    fn update(&mut self, record: T) -> RepoResult<WriteOutcome> {
        match self.position(record.id()) {
            Some(index) => {
                self.records[index] = record;
                Ok(WriteOutcome::Applied)
            }
            None => Ok(WriteOutcome::Missing),
        }
    }

    fn delete(&mut self, id: RecordId) -> RepoResult<WriteOutcome> {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                Ok(WriteOutcome::Applied)
            }
            None => Ok(WriteOutcome::Missing),
        }
    }
}
