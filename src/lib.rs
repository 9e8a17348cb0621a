//! # Drydock
//!
//! Metadata-driven repository layer for PostgreSQL on the `may` runtime.
//!
//! Entities are annotated structs resolved once into an immutable
//! [`EntityMetadata`] record by `#[derive(DockModel)]`. A pure
//! [`SqlGenerator`] turns metadata plus typed predicates into
//! parameterized SQL, and a thin [`Repository`] executes the statements
//! through any [`DockExecutor`].
//!
//! See [README on GitHub](https://github.com/microscaler/drydock) for the
//! full architecture.

pub mod config;
pub mod connection;
pub mod executor;
pub mod generator;
pub mod metadata;
pub mod model;
pub mod query;
pub mod repository;

#[cfg(test)]
pub(crate) mod tests_cfg;

// Re-exported for the metadata statics emitted by `#[derive(DockModel)]`.
pub use once_cell;

// The derive macro and the trait share a name; they live in different
// namespaces, so both resolve from the crate root.
pub use drydock_derive::{DockModel, FromRow};

pub use config::DatabaseConfig;
pub use connection::{connect, ConnectionError};
pub use executor::{DockError, DockExecutor, MayPostgresExecutor};
pub use generator::{SqlGenerator, Statement};
pub use metadata::{ColumnMeta, EntityMetadata};
pub use model::ModelTrait;
pub use query::{
    ColumnTrait, DockEntity, DockEntityName, FilterData, FromRow, LimitInfo, Paginator,
    PaginatorWithCount, PrimaryKeyToColumn, PrimaryKeyTrait, SelectInfo, SelectModel, SelectQuery,
};
pub use repository::Repository;
