//! Select query builder.
//!
//! `SelectQuery` collects a filter condition and per-query options, then
//! delegates statement construction to [`SqlGenerator`] so every SELECT in
//! the crate is produced by the same deterministic path. Execution methods
//! (`all`, `one`, `find_one`, `count`, pagination) live in the execution
//! module.

use crate::executor::DockError;
use crate::generator::{SqlGenerator, Statement};
use crate::query::filter::FilterData;
use crate::query::traits::{DockEntity, FromRow};
use sea_query::{Condition, IdenStatic, IntoCondition, Order};
use std::marker::PhantomData;

/// Query builder for selecting records.
///
/// Returned by `DockEntity::find()` and chained with filters, ordering,
/// pagination, and projection.
///
/// # Example
///
/// ```no_run
/// use drydock::{ColumnTrait, DockEntity, DockExecutor, DockModel};
/// use sea_query::Order;
///
/// #[derive(DockModel)]
/// #[table_name = "users"]
/// struct User {
///     #[primary_key]
///     id: i32,
///     name: String,
/// }
///
/// # fn demo(executor: &impl DockExecutor) -> Result<(), drydock::DockError> {
/// let users = Entity::find()
///     .filter(Column::Name.like("John%"))
///     .order_by(Column::Id, Order::Asc)
///     .limit(10)
///     .all(executor)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SelectQuery<E>
where
    E: DockEntity,
{
    pub(crate) conditions: Vec<Condition>,
    pub(crate) data: FilterData,
    _entity: PhantomData<E>,
}

impl<E: DockEntity> Default for SelectQuery<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SelectQuery<E>
where
    E: DockEntity,
{
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            data: FilterData::new(),
            _entity: PhantomData,
        }
    }

    /// Add a filter condition. Multiple calls are combined with AND;
    /// `sea_query::Condition::any()` expresses OR groups.
    pub fn filter<F>(mut self, condition: F) -> Self
    where
        F: IntoCondition,
    {
        self.conditions.push(condition.into_condition());
        self
    }

    /// Add an ORDER BY clause. Call order is preserved.
    pub fn order_by<C: IdenStatic>(mut self, column: C, order: Order) -> Self {
        self.data.order_by(column, order);
        self
    }

    /// Add a LIMIT clause.
    pub fn limit(mut self, limit: u64) -> Self {
        self.data.set_limit(limit);
        self
    }

    /// Add an OFFSET clause.
    pub fn offset(mut self, offset: u64) -> Self {
        self.data.set_offset(offset);
        self
    }

    /// Narrow the select list to the given columns.
    ///
    /// The typed execution methods decode into the full `Model`; combine a
    /// projection with [`into_model`](Self::into_model) and a struct that
    /// derives `FromRow` over just the selected columns.
    pub fn select_only<C: IdenStatic>(mut self, columns: &[C]) -> Self {
        self.data.select_columns(columns);
        self
    }

    /// Switch the result type to a custom row struct.
    pub fn into_model<M: FromRow>(self) -> SelectModel<E, M> {
        SelectModel::new(self)
    }

    /// Combined filter condition, or `None` when no filter was added.
    pub(crate) fn condition(&self) -> Option<Condition> {
        match self.conditions.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            many => {
                let mut cond = Condition::all();
                for c in many {
                    cond = cond.add(c.clone());
                }
                Some(cond)
            }
        }
    }

    /// Build the SELECT statement through the generator.
    pub(crate) fn build(&self) -> Result<Statement, DockError> {
        SqlGenerator::<E>::new().select_all(self.condition(), &self.data)
    }

    /// Build the matching COUNT statement (window and ordering ignored).
    pub(crate) fn build_count(&self) -> Result<Statement, DockError> {
        SqlGenerator::<E>::new().count(self.condition())
    }
}

/// Typed select query that decodes rows into `M` instead of the entity's
/// `Model`. Used together with projections.
pub struct SelectModel<E, M>
where
    E: DockEntity,
    M: FromRow,
{
    pub(crate) query: SelectQuery<E>,
    _model: PhantomData<M>,
}

impl<E, M> SelectModel<E, M>
where
    E: DockEntity,
    M: FromRow,
{
    pub(crate) fn new(query: SelectQuery<E>) -> Self {
        Self {
            query,
            _model: PhantomData,
        }
    }
}
