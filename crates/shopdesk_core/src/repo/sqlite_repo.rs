//! SQLite-backed record repository.
//!
//! # Responsibility
//! - Implement `Repository` over the `customers`/`products` tables.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Insertion order is the hidden autoincrement `seq` column; `id` is not
//!   unique, matching the in-memory semantics.
//! - Keyed writes target the lowest `seq` for an id.
//! - Assigned ids are tracked in `record_id_counters` and never reused.

use crate::db::migrations::latest_version;
use crate::model::customer::Customer;
use crate::model::product::{Price, Product};
use crate::model::record::{Record, RecordId};
use crate::repo::record_repo::{RepoError, RepoResult, Repository, WriteOutcome};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::marker::PhantomData;

/// Table mapping for records persisted by `SqliteRepository`.
pub trait SqlRecord: Record {
    /// Backing table name.
    const TABLE: &'static str;
    /// Non-id columns, in the order `field_values` yields them.
    const FIELD_COLUMNS: &'static [&'static str];

    fn field_values(&self) -> Vec<Value>;

    /// Parses one row selected as `id, FIELD_COLUMNS...`.
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

impl SqlRecord for Customer {
    const TABLE: &'static str = "customers";
    const FIELD_COLUMNS: &'static [&'static str] = &["name", "email"];

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.email.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Customer {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
        })
    }
}

impl SqlRecord for Product {
    const TABLE: &'static str = "products";
    const FIELD_COLUMNS: &'static [&'static str] = &["name", "price_cents"];

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Integer(self.price.cents()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let cents: i64 = row.get("price_cents")?;
        let price = Price::from_cents(cents).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid price_cents value `{cents}` in products.price_cents"
            ))
        })?;
        Ok(Product {
            id: row.get("id")?,
            name: row.get("name")?,
            price,
        })
    }
}

/// SQLite-backed repository for one record type.
pub struct SqliteRepository<'conn, T> {
    conn: &'conn Connection,
    _record: PhantomData<T>,
}

impl<'conn, T: SqlRecord> SqliteRepository<'conn, T> {
    /// Wraps a connection returned by `db::open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` when the record table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [T::TABLE],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable(T::TABLE));
        }

        Ok(Self {
            conn,
            _record: PhantomData,
        })
    }

    fn select_sql() -> String {
        format!(
            "SELECT id, {} FROM {}",
            T::FIELD_COLUMNS.join(", "),
            T::TABLE
        )
    }

    fn first_seq_sql() -> String {
        format!(
            "(SELECT seq FROM {} WHERE id = ?1 ORDER BY seq ASC LIMIT 1)",
            T::TABLE
        )
    }

    fn insert(&self, record: &T) -> RepoResult<()> {
        let placeholders = (2..=T::FIELD_COLUMNS.len() + 1)
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES (?1, {placeholders});",
            T::TABLE,
            T::FIELD_COLUMNS.join(", ")
        );

        let mut values = vec![Value::Integer(record.id())];
        values.extend(record.field_values());
        self.conn.execute(&sql, params_from_iter(values))?;
        Ok(())
    }

    fn next_id(&self) -> RepoResult<RecordId> {
        let highest_stored: Option<RecordId> = self.conn.query_row(
            &format!("SELECT MAX(id) FROM {};", T::TABLE),
            [],
            |row| row.get(0),
        )?;
        let last_assigned: Option<RecordId> = self
            .conn
            .query_row(
                "SELECT last_assigned FROM record_id_counters WHERE kind = ?1;",
                [T::KIND],
                |row| row.get(0),
            )
            .optional()?;

        highest_stored
            .unwrap_or(0)
            .max(last_assigned.unwrap_or(0))
            .checked_add(1)
            .ok_or(RepoError::IdSpaceExhausted)
    }
}

impl<T: SqlRecord> Repository<T> for SqliteRepository<'_, T> {
    fn get_all(&self) -> RepoResult<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY seq ASC;", Self::select_sql()))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(T::from_row(row)?);
        }

        Ok(records)
    }

    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<T>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE id = ?1 ORDER BY seq ASC LIMIT 1;",
            Self::select_sql()
        ))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(T::from_row(row)?));
        }

        Ok(None)
    }

    fn add(&mut self, record: T) -> RepoResult<()> {
        self.insert(&record)
    }

    fn add_new(&mut self, draft: T::Draft) -> RepoResult<T> {
        let tx = self.conn.unchecked_transaction()?;
        let id = self.next_id()?;
        let record = T::from_draft(id, draft);
        self.insert(&record)?;
        tx.execute(
            "INSERT INTO record_id_counters (kind, last_assigned) VALUES (?1, ?2)
             ON CONFLICT(kind) DO UPDATE SET last_assigned = excluded.last_assigned;",
            params![T::KIND, id],
        )?;
        tx.commit()?;
        Ok(record)
    }

    fn update(&mut self, record: T) -> RepoResult<WriteOutcome> {
        // ?1 is the id consumed by the seq subquery; fields start at ?2.
        let assignments = T::FIELD_COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments} WHERE seq = {};",
            T::TABLE,
            Self::first_seq_sql()
        );

        let mut values = vec![Value::Integer(record.id())];
        values.extend(record.field_values());
        let changed = self.conn.execute(&sql, params_from_iter(values))?;

        Ok(write_outcome(changed))
    }

    fn delete(&mut self, id: RecordId) -> RepoResult<WriteOutcome> {
        let changed = self.conn.execute(
            &format!(
                "DELETE FROM {} WHERE seq = {};",
                T::TABLE,
                Self::first_seq_sql()
            ),
            [id],
        )?;

        Ok(write_outcome(changed))
    }
}

fn write_outcome(changed: usize) -> WriteOutcome {
    if changed == 0 {
        WriteOutcome::Missing
    } else {
        WriteOutcome::Applied
    }
}
