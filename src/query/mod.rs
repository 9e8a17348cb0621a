//! Query building and execution for drydock entities.
//!
//! This module provides the fluent query surface over the statement
//! generator:
//! - **Traits**: core entity traits (`DockEntity`, `DockEntityName`,
//!   `FromRow`)
//! - **Column**: typed predicate combinators (`ColumnTrait`)
//! - **Filter**: per-query transient options (`FilterData`)
//! - **Select**: SELECT builder (`SelectQuery`, `SelectModel`)
//! - **Execution**: `all`/`one`/`find_one`/`count` plus pagination
//! - **Primary key**: key metadata traits
//!
//! # Examples
//!
//! ```no_run
//! use drydock::{ColumnTrait, DockEntity, DockExecutor, DockModel};
//! use sea_query::Order;
//!
//! #[derive(DockModel)]
//! #[table_name = "users"]
//! struct User {
//!     #[primary_key]
//!     id: i32,
//!     name: String,
//!     active: bool,
//! }
//!
//! # fn demo(executor: &impl DockExecutor) -> Result<(), drydock::DockError> {
//! let active_users = Entity::find()
//!     .filter(Column::Active.eq(true))
//!     .order_by(Column::Id, Order::Asc)
//!     .limit(10)
//!     .all(executor)?;
//! # Ok(())
//! # }
//! ```

pub mod traits;
#[doc(inline)]
pub use traits::{DockEntity, DockEntityName, FromRow};

pub mod column;
#[doc(inline)]
pub use column::ColumnTrait;

pub mod filter;
#[doc(inline)]
pub use filter::{FilterData, LimitInfo, SelectInfo};

pub mod select;
#[doc(inline)]
pub use select::{SelectModel, SelectQuery};

pub mod execution;
#[doc(inline)]
pub use execution::{Paginator, PaginatorWithCount};

pub mod primary_key;
#[doc(inline)]
pub use primary_key::{PrimaryKeyToColumn, PrimaryKeyTrait};

pub(crate) mod error_handling;
pub(crate) mod value_conversion;
