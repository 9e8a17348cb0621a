//! Procedural macros for the drydock repository layer.
//!
//! This crate provides the `DockModel` and `FromRow` derives.

mod attributes;
mod macros;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for `DockModel` - generates the full entity item set.
///
/// From one annotated struct this macro generates:
/// - `Entity` unit struct (table identity, `DockEntity` implementation)
/// - `Column` enum (typed column handles for predicates and ordering)
/// - `PrimaryKey` enum with key metadata traits
/// - `{Struct}Model` struct (immutable row representation)
/// - `FromRow` and `ModelTrait` implementations for the model
/// - the entity's memoized `EntityMetadata` record
///
/// Recognized attributes: `#[table_name = "..."]` on the struct;
/// `#[primary_key]`, `#[auto_increment]`, `#[column_name = "..."]`,
/// `#[skip]` (alias `#[ignore]`), `#[soft_delete]`, and `#[nullable]` on
/// fields. One entity per module, since the generated item names are
/// fixed.
///
/// # Example
///
/// ```ignore
/// use drydock::DockModel;
///
/// #[derive(DockModel)]
/// #[table_name = "users"]
/// pub struct User {
///     #[primary_key]
///     #[auto_increment]
///     pub id: i32,
///     pub email: String,
///     #[column_name = "display_name"]
///     pub name: Option<String>,
///     #[skip]
///     pub cached_score: Option<i64>,
/// }
/// ```
#[proc_macro_derive(
    DockModel,
    attributes(
        table_name,
        primary_key,
        auto_increment,
        column_name,
        skip,
        ignore,
        soft_delete,
        nullable
    )
)]
pub fn derive_dock_model(input: TokenStream) -> TokenStream {
    macros::derive_dock_model(input)
}

/// Derive macro for `FromRow` - decodes a driver row into a struct.
///
/// `DockModel` already generates `FromRow` for the entity's model; this
/// standalone derive is for projection structs used with
/// `SelectQuery::select_only` + `into_model`.
///
/// # Example
///
/// ```ignore
/// use drydock::FromRow;
///
/// #[derive(FromRow)]
/// pub struct UserSummary {
///     pub id: i32,
///     pub email: String,
/// }
/// ```
#[proc_macro_derive(FromRow, attributes(column_name))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    macros::derive_from_row(input)
}
