//! Primary key traits.
//!
//! `#[derive(DockModel)]` generates a `PrimaryKey` enum per entity and
//! implements these traits for it. Key values travel through statements as
//! plain `sea_query::Value`s ordered as the key columns were declared; the
//! traits carry the remaining per-key facts (auto-increment, the matching
//! `Column` variant).

/// Trait for primary key metadata.
pub trait PrimaryKeyTrait: Copy {
    /// The Rust type of this key column's value
    type ValueType;

    /// Whether the database generates this key's value
    fn auto_increment(self) -> bool;
}

/// Maps a `PrimaryKey` variant to its `Column` variant.
pub trait PrimaryKeyToColumn: Copy {
    type Column;

    fn to_column(self) -> Self::Column;
}
