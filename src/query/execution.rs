//! Query execution methods for `SelectQuery` and `SelectModel`.
//!
//! Statements are bound through `with_converted_params` and run against a
//! [`DockExecutor`]. Pagination fetches pages by limit/offset on a cloned
//! base query; `PaginatorWithCount` runs one COUNT and caches the total.

use crate::executor::{DockError, DockExecutor};
use crate::generator::Statement;
use crate::query::error_handling::is_no_rows_error;
use crate::query::select::{SelectModel, SelectQuery};
use crate::query::traits::{DockEntity, FromRow};
use crate::query::value_conversion::with_converted_params;

/// Run a select statement and decode every row.
pub(crate) fn fetch_all<M, Ex>(stmt: &Statement, executor: &Ex) -> Result<Vec<M>, DockError>
where
    M: FromRow,
    Ex: DockExecutor,
{
    with_converted_params(&stmt.values, |params| {
        let rows = executor.query_all(&stmt.sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let model = M::from_row(&row)
                .map_err(|e| DockError::Parse(format!("failed to decode row: {e}")))?;
            results.push(model);
        }
        Ok(results)
    })
}

/// Run a select statement expected to return exactly one row.
pub(crate) fn fetch_one<M, Ex>(stmt: &Statement, executor: &Ex) -> Result<M, DockError>
where
    M: FromRow,
    Ex: DockExecutor,
{
    with_converted_params(&stmt.values, |params| {
        let row = executor.query_one(&stmt.sql, params)?;
        M::from_row(&row).map_err(|e| DockError::Parse(format!("failed to decode row: {e}")))
    })
}

/// Run a COUNT statement and read the single bigint column.
pub(crate) fn fetch_count<Ex>(stmt: &Statement, executor: &Ex) -> Result<u64, DockError>
where
    Ex: DockExecutor,
{
    with_converted_params(&stmt.values, |params| {
        let row = executor.query_one(&stmt.sql, params)?;
        let count = row
            .try_get::<usize, i64>(0)
            .map_err(|e| DockError::Parse(format!("failed to decode count: {e}")))?;
        Ok(count.max(0) as u64)
    })
}

/// Run a mutating statement and return the affected-row count.
pub(crate) fn execute_statement<Ex>(stmt: &Statement, executor: &Ex) -> Result<u64, DockError>
where
    Ex: DockExecutor,
{
    with_converted_params(&stmt.values, |params| executor.execute(&stmt.sql, params))
}

impl<E> SelectQuery<E>
where
    E: DockEntity,
{
    /// Execute the query and return all results.
    pub fn all<Ex: DockExecutor>(self, executor: &Ex) -> Result<Vec<E::Model>, DockError> {
        let stmt = self.build()?;
        fetch_all(&stmt, executor)
    }

    /// Execute the query and return a single result.
    ///
    /// # Errors
    ///
    /// Fails when zero or more than one row is returned.
    pub fn one<Ex: DockExecutor>(self, executor: &Ex) -> Result<E::Model, DockError> {
        let stmt = self.build()?;
        fetch_one(&stmt, executor)
    }

    /// Execute the query and return the first result, or `None` when the
    /// query matches no rows.
    pub fn find_one<Ex: DockExecutor>(self, executor: &Ex) -> Result<Option<E::Model>, DockError> {
        match self.one(executor) {
            Ok(model) => Ok(Some(model)),
            Err(e) if is_no_rows_error(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Count the rows this query matches, ignoring ordering and any
    /// limit/offset window.
    pub fn count<Ex: DockExecutor>(&self, executor: &Ex) -> Result<u64, DockError> {
        let stmt = self.build_count()?;
        fetch_count(&stmt, executor)
    }

    /// Paginate results with a given page size.
    pub fn paginate<Ex: DockExecutor>(self, executor: &Ex, page_size: u64) -> Paginator<'_, E, Ex> {
        Paginator {
            query: self,
            executor,
            page_size,
        }
    }

    /// Paginate results and expose the total item/page counts.
    pub fn paginate_and_count<Ex: DockExecutor>(
        self,
        executor: &Ex,
        page_size: u64,
    ) -> PaginatorWithCount<'_, E, Ex> {
        PaginatorWithCount {
            paginator: Paginator {
                query: self,
                executor,
                page_size,
            },
            total: None,
        }
    }
}

impl<E, M> SelectModel<E, M>
where
    E: DockEntity,
    M: FromRow,
{
    /// Execute the query, decoding rows into `M`.
    pub fn all<Ex: DockExecutor>(self, executor: &Ex) -> Result<Vec<M>, DockError> {
        let stmt = self.query.build()?;
        fetch_all(&stmt, executor)
    }

    /// Execute the query and decode a single row into `M`.
    pub fn one<Ex: DockExecutor>(self, executor: &Ex) -> Result<M, DockError> {
        let stmt = self.query.build()?;
        fetch_one(&stmt, executor)
    }
}

/// Page-by-page fetcher over a base query.
pub struct Paginator<'e, E, Ex>
where
    E: DockEntity,
    Ex: DockExecutor,
{
    pub(crate) query: SelectQuery<E>,
    pub(crate) executor: &'e Ex,
    pub(crate) page_size: u64,
}

impl<'e, E, Ex> Paginator<'e, E, Ex>
where
    E: DockEntity,
    Ex: DockExecutor,
{
    /// Fetch one zero-based page.
    pub fn fetch_page(&self, page: u64) -> Result<Vec<E::Model>, DockError> {
        let query = self
            .query
            .clone()
            .limit(self.page_size)
            .offset(page * self.page_size);
        query.all(self.executor)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

/// Paginator that also knows the total number of matching rows. The count
/// query runs once, on first use.
pub struct PaginatorWithCount<'e, E, Ex>
where
    E: DockEntity,
    Ex: DockExecutor,
{
    paginator: Paginator<'e, E, Ex>,
    total: Option<u64>,
}

impl<'e, E, Ex> PaginatorWithCount<'e, E, Ex>
where
    E: DockEntity,
    Ex: DockExecutor,
{
    /// Total number of matching rows.
    pub fn num_items(&mut self) -> Result<u64, DockError> {
        if let Some(total) = self.total {
            return Ok(total);
        }
        let total = self.paginator.query.count(self.paginator.executor)?;
        self.total = Some(total);
        Ok(total)
    }

    /// Total number of pages at the configured page size.
    pub fn num_pages(&mut self) -> Result<u64, DockError> {
        let items = self.num_items()?;
        let size = self.paginator.page_size.max(1);
        Ok(items.div_ceil(size))
    }

    /// Fetch one zero-based page.
    pub fn fetch_page(&self, page: u64) -> Result<Vec<E::Model>, DockError> {
        self.paginator.fetch_page(page)
    }
}
