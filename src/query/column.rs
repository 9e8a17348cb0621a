//! Column predicate combinators.
//!
//! `ColumnTrait` turns a typed `Column` handle into a filter expression.
//! Every literal operand becomes a bound parameter in the generated
//! statement, and combinators compose through `sea_query::Condition` with
//! explicit parenthesization, so precedence always matches the builder
//! structure.

use sea_query::{Expr, ExprTrait, IntoColumnRef};

/// Filter combinators for column handles.
///
/// # Example
///
/// ```no_run
/// use drydock::{ColumnTrait, DockModel};
/// use sea_query::Condition;
///
/// #[derive(DockModel)]
/// #[table_name = "users"]
/// struct User {
///     #[primary_key]
///     id: i32,
///     email: String,
///     age: i32,
/// }
///
/// let filter = Condition::all()
///     .add(Column::Age.gte(18))
///     .add(Condition::any()
///         .add(Column::Email.like("%@example.com"))
///         .add(Column::Email.is_null()));
/// ```
pub trait ColumnTrait: IntoColumnRef {
    /// Create an equality filter: `column = value`
    fn eq<T: Into<sea_query::Value>>(self, value: T) -> Expr {
        Expr::col(self).eq(value)
    }

    /// Create a not-equal filter: `column <> value`
    fn ne<T: Into<sea_query::Value>>(self, value: T) -> Expr {
        Expr::col(self).ne(value)
    }

    /// Create a greater-than filter: `column > value`
    fn gt<T: Into<sea_query::Value>>(self, value: T) -> Expr {
        Expr::col(self).gt(value)
    }

    /// Create a greater-than-or-equal filter: `column >= value`
    fn gte<T: Into<sea_query::Value>>(self, value: T) -> Expr {
        Expr::col(self).gte(value)
    }

    /// Create a less-than filter: `column < value`
    fn lt<T: Into<sea_query::Value>>(self, value: T) -> Expr {
        Expr::col(self).lt(value)
    }

    /// Create a less-than-or-equal filter: `column <= value`
    fn lte<T: Into<sea_query::Value>>(self, value: T) -> Expr {
        Expr::col(self).lte(value)
    }

    /// Create a LIKE filter: `column LIKE pattern`
    fn like(self, pattern: &str) -> Expr {
        Expr::col(self).like(pattern)
    }

    /// Create an IN filter: `column IN (values)`
    #[allow(clippy::wrong_self_convention)]
    fn is_in<T, I>(self, values: I) -> Expr
    where
        T: Into<sea_query::Value>,
        I: IntoIterator<Item = T>,
    {
        Expr::col(self).is_in(values)
    }

    /// Create a NOT IN filter: `column NOT IN (values)`
    #[allow(clippy::wrong_self_convention)]
    fn is_not_in<T, I>(self, values: I) -> Expr
    where
        T: Into<sea_query::Value>,
        I: IntoIterator<Item = T>,
    {
        Expr::col(self).is_not_in(values)
    }

    /// Create an IS NULL filter: `column IS NULL`
    #[allow(clippy::wrong_self_convention)]
    fn is_null(self) -> Expr {
        Expr::col(self).is_null()
    }

    /// Create an IS NOT NULL filter: `column IS NOT NULL`
    #[allow(clippy::wrong_self_convention)]
    fn is_not_null(self) -> Expr {
        Expr::col(self).is_not_null()
    }

    /// Create a BETWEEN filter: `column BETWEEN start AND end`
    fn between<T1: Into<sea_query::Value>, T2: Into<sea_query::Value>>(
        self,
        start: T1,
        end: T2,
    ) -> Expr {
        Expr::col(self).between(start, end)
    }
}

// Any column reference gets the combinators; the typed Column enums
// generated by the derive are the intended call sites.
impl<T: IntoColumnRef> ColumnTrait for T {}
