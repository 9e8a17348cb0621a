//! Per-query filter options.
//!
//! `FilterData` is the transient state attached to one SELECT: an optional
//! limit/offset window, an ordered list of sort columns, and an optional
//! column projection. It is built per call, consumed by the statement
//! generator, and never shared across threads.

use sea_query::{IdenStatic, Order};

/// Limit/offset window for a paged select. Either half can be set on its
/// own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitInfo {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Column projection for a select.
///
/// Column names must belong to the entity's metadata; the generator
/// rejects unknown names with a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectInfo {
    pub columns: Vec<&'static str>,
}

/// Transient per-query options: window, ordering, projection.
#[derive(Debug, Clone, Default)]
pub struct FilterData {
    pub limit: LimitInfo,
    pub order: Vec<(&'static str, Order)>,
    pub select: Option<SelectInfo>,
}

impl FilterData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of returned rows.
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.limit.limit = Some(limit);
        self
    }

    /// Skip `offset` rows.
    pub fn set_offset(&mut self, offset: u64) -> &mut Self {
        self.limit.offset = Some(offset);
        self
    }

    /// Append a sort column. Ordering of calls is preserved in the
    /// generated ORDER BY clause.
    pub fn order_by<C: IdenStatic>(&mut self, column: C, order: Order) -> &mut Self {
        self.order.push((column.as_str(), order));
        self
    }

    /// Narrow the select list to the given columns, in the given order.
    pub fn select_columns<C: IdenStatic>(&mut self, columns: &[C]) -> &mut Self {
        self.select = Some(SelectInfo {
            columns: columns.iter().map(|c| c.as_str()).collect(),
        });
        self
    }
}
