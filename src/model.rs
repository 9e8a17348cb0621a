//! Model trait for accessing model data.
//!
//! `ModelTrait` gives the statement generator dynamic access to a model's
//! column values and primary key, without knowing the concrete struct.
//! Implementations are generated by `#[derive(DockModel)]`.

use crate::query::DockEntity;
use sea_query::Value;

/// Trait for Model-level operations.
///
/// # Example
///
/// ```no_run
/// use drydock::{DockModel, ModelTrait};
///
/// #[derive(DockModel)]
/// #[table_name = "users"]
/// struct User {
///     #[primary_key]
///     id: i32,
///     name: String,
/// }
///
/// # fn demo(model: UserModel) {
/// let name = model.get(Column::Name);
/// let keys = model.primary_key_values();
/// # }
/// ```
pub trait ModelTrait: Clone + Send + std::fmt::Debug {
    /// The Entity type that this Model belongs to
    type Entity: DockEntity;

    /// Get the value of a column from the model
    fn get(&self, column: <Self::Entity as DockEntity>::Column) -> Value;

    /// Get a column value by its database column name.
    ///
    /// Returns `None` for names that are not mapped columns of the entity.
    fn get_by_column_name(&self, column_name: &str) -> Option<Value>;

    /// Primary key values, ordered as the key columns were declared.
    ///
    /// Empty for entities without a primary key.
    fn primary_key_values(&self) -> Vec<Value>;
}
