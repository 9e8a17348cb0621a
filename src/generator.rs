//! SQL statement generation.
//!
//! `SqlGenerator` is a pure statement factory: given an entity's metadata
//! record, an optional filter condition, and per-query options, it
//! produces a [`Statement`] (SQL text plus bound values) for each
//! operation the repository supports. No I/O happens here; identical
//! inputs always produce byte-identical SQL, and parameter placeholders
//! are numbered sequentially across clauses so they never collide.
//!
//! Entities with a soft-delete marker column never produce a literal
//! DELETE: deletes rewrite to an UPDATE of the marker, and every read
//! filters marked rows out.

use crate::executor::DockError;
use crate::metadata::EntityMetadata;
use crate::model::ModelTrait;
use crate::query::filter::FilterData;
use crate::query::DockEntity;
use sea_query::{
    Asterisk, Condition, DeleteStatement, Expr, ExprTrait, Iden, InsertStatement,
    PostgresQueryBuilder, SelectStatement, UpdateStatement, Value, Values,
};
use std::marker::PhantomData;

/// One generated statement: SQL text plus its parameter bag. Immutable
/// once produced, consumed exactly once by the execution layer.
#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: String,
    pub values: Values,
}

impl Statement {
    fn from_parts((sql, values): (String, Values)) -> Self {
        Self { sql, values }
    }
}

/// Table identifier, possibly prefixed.
struct TableIden(String);

impl Iden for TableIden {
    fn unquoted(&self) -> &str {
        &self.0
    }
}

/// Column identifier taken from entity metadata.
#[derive(Copy, Clone)]
struct ColumnIden(&'static str);

impl Iden for ColumnIden {
    fn unquoted(&self) -> &str {
        self.0
    }
}

/// Statement factory for one entity type.
///
/// The optional table prefix mirrors the `table_prefix` configuration
/// setting; [`crate::Repository`] wires it through automatically.
pub struct SqlGenerator<E: DockEntity> {
    table_prefix: Option<String>,
    _entity: PhantomData<E>,
}

impl<E: DockEntity> Default for SqlGenerator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockEntity> SqlGenerator<E> {
    pub fn new() -> Self {
        Self {
            table_prefix: None,
            _entity: PhantomData,
        }
    }

    /// Create a generator that prepends `prefix` to the table name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            table_prefix: if prefix.is_empty() { None } else { Some(prefix) },
            _entity: PhantomData,
        }
    }

    fn metadata(&self) -> &'static EntityMetadata {
        E::metadata()
    }

    fn table_name(&self) -> String {
        let table = self.metadata().table;
        match &self.table_prefix {
            Some(prefix) => format!("{prefix}{table}"),
            None => table.to_string(),
        }
    }

    /// WHERE condition combining the caller's filter with the soft-delete
    /// read filter. Returns `None` when there is nothing to constrain.
    fn read_condition(&self, filter: Option<Condition>) -> Option<Condition> {
        let marker = self
            .metadata()
            .soft_delete_column()
            .map(|m| Expr::col(ColumnIden(m.name)).ne(true));
        match (filter, marker) {
            (None, None) => None,
            (Some(f), None) => Some(f),
            (None, Some(m)) => Some(Condition::all().add(m)),
            (Some(f), Some(m)) => Some(Condition::all().add(f).add(m)),
        }
    }

    /// `SELECT <columns> FROM <table> [WHERE ...] [ORDER BY ...]
    /// [LIMIT ...] [OFFSET ...]`.
    ///
    /// # Errors
    ///
    /// Configuration error when the entity has no mapped columns, or when
    /// a projection or sort column is not part of the entity's metadata.
    pub fn select_all(
        &self,
        filter: Option<Condition>,
        data: &FilterData,
    ) -> Result<Statement, DockError> {
        let meta = self.metadata();
        meta.require_mapped()?;
        let table = self.table_name();

        let mut query = SelectStatement::default();
        match &data.select {
            Some(projection) => {
                for name in &projection.columns {
                    let col = meta.column(name).ok_or_else(|| {
                        DockError::Config(format!(
                            "projection column `{name}` is not mapped on entity `{}`",
                            meta.table
                        ))
                    })?;
                    query.column((TableIden(table.clone()), ColumnIden(col.name)));
                }
            }
            None => {
                for col in meta.mapped() {
                    query.column((TableIden(table.clone()), ColumnIden(col.name)));
                }
            }
        }
        query.from(TableIden(table));

        if let Some(cond) = self.read_condition(filter) {
            query.cond_where(cond);
        }

        for (name, order) in &data.order {
            let name: &'static str = *name;
            meta.column(name).ok_or_else(|| {
                DockError::Config(format!(
                    "sort column `{name}` is not mapped on entity `{}`",
                    meta.table
                ))
            })?;
            query.order_by(ColumnIden(name), order.clone());
        }
        if let Some(limit) = data.limit.limit {
            query.limit(limit);
        }
        if let Some(offset) = data.limit.offset {
            query.offset(offset);
        }

        Ok(Statement::from_parts(query.build(PostgresQueryBuilder)))
    }

    /// Select one row by primary key. `keys` must carry one value per key
    /// column, ordered as the key columns were declared.
    pub fn select_by_key(&self, keys: &[Value]) -> Result<Statement, DockError> {
        let meta = self.metadata();
        let key_cols = meta.require_keys()?;
        self.check_key_arity(keys.len(), key_cols.len())?;
        let table = self.table_name();

        let mut query = SelectStatement::default();
        for col in meta.mapped() {
            query.column((TableIden(table.clone()), ColumnIden(col.name)));
        }
        query.from(TableIden(table));
        for (col, value) in key_cols.iter().zip(keys) {
            query.and_where(Expr::col(ColumnIden(col.name)).eq(value.clone()));
        }
        if let Some(marker) = meta.soft_delete_column() {
            query.and_where(Expr::col(ColumnIden(marker.name)).ne(true));
        }

        Ok(Statement::from_parts(query.build(PostgresQueryBuilder)))
    }

    /// `SELECT COUNT(*) FROM <table> [WHERE ...]`.
    pub fn count(&self, filter: Option<Condition>) -> Result<Statement, DockError> {
        let meta = self.metadata();
        meta.require_mapped()?;

        let mut query = SelectStatement::default();
        query
            .expr(Expr::cust("COUNT(*)"))
            .from(TableIden(self.table_name()));
        if let Some(cond) = self.read_condition(filter) {
            query.cond_where(cond);
        }

        Ok(Statement::from_parts(query.build(PostgresQueryBuilder)))
    }

    /// INSERT of every non-identity mapped column, with `RETURNING *` so
    /// database-generated values round-trip into the decoded model.
    pub fn insert(&self, model: &E::Model) -> Result<Statement, DockError> {
        let meta = self.metadata();
        meta.require_mapped()?;

        let mut columns = Vec::new();
        let mut values = Vec::new();
        for col in meta.mapped().filter(|c| !c.auto_increment) {
            columns.push(ColumnIden(col.name));
            values.push(Expr::val(self.model_value(model, col.name)?));
        }
        if columns.is_empty() {
            return Err(DockError::Config(format!(
                "entity `{}` has no insertable columns",
                meta.table
            )));
        }

        let mut query = InsertStatement::default();
        query.into_table(TableIden(self.table_name()));
        query.columns(columns);
        query.values_panic(values);
        query.returning_col(Asterisk);

        Ok(Statement::from_parts(query.build(PostgresQueryBuilder)))
    }

    /// UPDATE of every non-key mapped column, keyed by exactly the primary
    /// key columns in declaration order.
    pub fn update(&self, model: &E::Model) -> Result<Statement, DockError> {
        let meta = self.metadata();
        let key_cols = meta.require_keys()?;

        let mut query = UpdateStatement::default();
        query.table(TableIden(self.table_name()));

        let mut assigned = 0;
        for col in meta.mapped().filter(|c| !c.primary_key && !c.auto_increment) {
            query.value(ColumnIden(col.name), Expr::val(self.model_value(model, col.name)?));
            assigned += 1;
        }
        if assigned == 0 {
            return Err(DockError::Config(format!(
                "entity `{}` has no non-key columns to update",
                meta.table
            )));
        }

        let key_values = model.primary_key_values();
        self.check_key_arity(key_values.len(), key_cols.len())?;
        for (col, value) in key_cols.iter().zip(key_values) {
            query.and_where(Expr::col(ColumnIden(col.name)).eq(value));
        }

        Ok(Statement::from_parts(query.build(PostgresQueryBuilder)))
    }

    /// Delete the row the model identifies via its primary key values.
    pub fn delete(&self, model: &E::Model) -> Result<Statement, DockError> {
        self.delete_by_key(&model.primary_key_values())
    }

    /// Delete one row by primary key. Soft-delete entities get an UPDATE
    /// of the marker column instead of a DELETE.
    pub fn delete_by_key(&self, keys: &[Value]) -> Result<Statement, DockError> {
        let meta = self.metadata();
        let key_cols = meta.require_keys()?;
        self.check_key_arity(keys.len(), key_cols.len())?;

        let built = match meta.soft_delete_column() {
            Some(marker) => {
                let mut query = UpdateStatement::default();
                query.table(TableIden(self.table_name()));
                query.value(ColumnIden(marker.name), Expr::val(true));
                for (col, value) in key_cols.iter().zip(keys) {
                    query.and_where(Expr::col(ColumnIden(col.name)).eq(value.clone()));
                }
                query.build(PostgresQueryBuilder)
            }
            None => {
                let mut query = DeleteStatement::default();
                query.from_table(TableIden(self.table_name()));
                for (col, value) in key_cols.iter().zip(keys) {
                    query.and_where(Expr::col(ColumnIden(col.name)).eq(value.clone()));
                }
                query.build(PostgresQueryBuilder)
            }
        };

        Ok(Statement::from_parts(built))
    }

    /// Delete every row matching `filter`, honoring the soft-delete
    /// rewrite.
    pub fn delete_where(&self, filter: Condition) -> Result<Statement, DockError> {
        let meta = self.metadata();
        meta.require_mapped()?;

        let built = match meta.soft_delete_column() {
            Some(marker) => {
                let mut query = UpdateStatement::default();
                query.table(TableIden(self.table_name()));
                query.value(ColumnIden(marker.name), Expr::val(true));
                query.cond_where(filter);
                query.build(PostgresQueryBuilder)
            }
            None => {
                let mut query = DeleteStatement::default();
                query.from_table(TableIden(self.table_name()));
                query.cond_where(filter);
                query.build(PostgresQueryBuilder)
            }
        };

        Ok(Statement::from_parts(built))
    }

    fn model_value(&self, model: &E::Model, column: &'static str) -> Result<Value, DockError> {
        model.get_by_column_name(column).ok_or_else(|| {
            DockError::Config(format!(
                "column `{column}` is not present on the model for entity `{}`",
                self.metadata().table
            ))
        })
    }

    fn check_key_arity(&self, got: usize, expected: usize) -> Result<(), DockError> {
        if got != expected {
            return Err(DockError::Config(format!(
                "entity `{}` expects {expected} key value(s), got {got}",
                self.metadata().table
            )));
        }
        Ok(())
    }
}
