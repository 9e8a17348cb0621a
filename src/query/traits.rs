//! Core entity traits.
//!
//! `DockEntityName` carries the table name, `DockEntity` ties an entity's
//! unit struct to its `Model` and `Column` types and to the memoized
//! metadata record, and `FromRow` decodes driver rows into models. All
//! three are implemented by `#[derive(DockModel)]`.

use crate::metadata::EntityMetadata;
use crate::model::ModelTrait;
use crate::query::select::SelectQuery;
use may_postgres::Row;
use sea_query::IdenStatic;

/// Provides the unprefixed table name for an entity.
pub trait DockEntityName: Default {
    fn table_name(&self) -> &'static str;
}

/// Core entity trait.
///
/// The entity is a unit struct; its `Model` is the immutable row
/// representation and its `Column` enum is the typed handle used in
/// predicates, ordering, and projections.
pub trait DockEntity: DockEntityName + IdenStatic + Copy + Send + Sync + 'static {
    /// Immutable row representation
    type Model: ModelTrait<Entity = Self> + FromRow;

    /// Typed column handles
    type Column: IdenStatic + Copy + Send + Sync + 'static;

    /// The entity's metadata record, resolved once per process.
    fn metadata() -> &'static EntityMetadata;

    /// Start a SELECT query over this entity.
    fn find() -> SelectQuery<Self> {
        SelectQuery::new()
    }
}

/// Trait for types that can be created from a database row.
pub trait FromRow: Sized {
    /// Decode one driver row.
    ///
    /// # Errors
    ///
    /// Returns the driver error when a column is missing or its value
    /// cannot be converted to the field type.
    fn from_row(row: &Row) -> Result<Self, may_postgres::Error>;
}
