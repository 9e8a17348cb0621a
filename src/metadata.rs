//! Entity metadata records.
//!
//! `#[derive(DockModel)]` resolves an annotated struct into one immutable
//! [`EntityMetadata`] per entity type, materialized behind a
//! `once_cell::sync::Lazy` static so resolution happens exactly once per
//! process and reads are safe from any number of threads. The
//! [`crate::SqlGenerator`] is driven entirely by this record.

use crate::executor::DockError;

/// Immutable description of one mapped entity type.
///
/// `columns` is ordered as the fields were declared; every consumer that
/// iterates it inherits that ordering, which is what makes statement
/// generation deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMetadata {
    /// Unprefixed table name
    pub table: &'static str,
    /// Column descriptors in declaration order, including skipped fields
    pub columns: Vec<ColumnMeta>,
}

/// Descriptor for a single struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Rust field name
    pub field: &'static str,
    /// Database column name
    pub name: &'static str,
    /// Part of the primary key
    pub primary_key: bool,
    /// Database-generated identity value; excluded from INSERT column lists
    pub auto_increment: bool,
    /// `#[skip]` field, never emitted into SQL
    pub skipped: bool,
    /// Boolean delete-marker column; its presence rewrites DELETE to UPDATE
    pub soft_delete: bool,
}

impl EntityMetadata {
    /// Columns that map to the database, in declaration order.
    pub fn mapped(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| !c.skipped)
    }

    /// Primary key columns in declaration order.
    pub fn key_columns(&self) -> Vec<&ColumnMeta> {
        self.mapped().filter(|c| c.primary_key).collect()
    }

    /// The soft-delete marker column, if the entity declares one.
    pub fn soft_delete_column(&self) -> Option<&ColumnMeta> {
        self.mapped().find(|c| c.soft_delete)
    }

    /// Look up a mapped column by its database name.
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.mapped().find(|c| c.name == name)
    }

    /// Key columns, or a configuration error naming the table when the
    /// entity has none. Update and delete statement generation requires a
    /// non-empty key set.
    pub fn require_keys(&self) -> Result<Vec<&ColumnMeta>, DockError> {
        let keys = self.key_columns();
        if keys.is_empty() {
            return Err(DockError::Config(format!(
                "entity `{}` has no primary key columns; key-based statements require at least one",
                self.table
            )));
        }
        Ok(keys)
    }

    /// Fails when no column maps to the database at all. Surfaced at first
    /// use, never retried.
    pub fn require_mapped(&self) -> Result<(), DockError> {
        if self.mapped().next().is_none() {
            return Err(DockError::Config(format!(
                "entity `{}` has no mapped columns",
                self.table
            )));
        }
        Ok(())
    }
}
