//! WHERE and HAVING predicates

use storage::Row;

use super::tuple::{ColumnRef, RowTuple};

/// Row-filter evaluated against every row-tuple before grouping
pub trait Where {
    fn accepts(&self, tuple: &RowTuple<'_>) -> bool;
}

impl<F> Where for F
where
    F: Fn(&RowTuple<'_>) -> bool,
{
    fn accepts(&self, tuple: &RowTuple<'_>) -> bool {
        self(tuple)
    }
}

/// No WHERE clause
#[derive(Debug, Clone, Copy, Default)]
pub struct WhereAll;

impl Where for WhereAll {
    fn accepts(&self, _tuple: &RowTuple<'_>) -> bool {
        true
    }
}

/// Equi-join predicate `left = right`
///
/// NULL never equals anything, matching SQL comparison.
#[derive(Debug, Clone)]
pub struct ColumnsEqual {
    pub left: ColumnRef,
    pub right: ColumnRef,
}

impl ColumnsEqual {
    pub fn new(left: impl Into<ColumnRef>, right: impl Into<ColumnRef>) -> Self {
        ColumnsEqual { left: left.into(), right: right.into() }
    }
}

impl Where for ColumnsEqual {
    fn accepts(&self, tuple: &RowTuple<'_>) -> bool {
        let left = self.left.eval(tuple);
        let right = self.right.eval(tuple);
        left.partial_cmp(&right) == Some(std::cmp::Ordering::Equal)
    }
}

/// Post-aggregation filter, evaluated once when a group is created
pub trait Having {
    fn admits(&self, row: &Row) -> bool;
}

impl<F> Having for F
where
    F: Fn(&Row) -> bool,
{
    fn admits(&self, row: &Row) -> bool {
        self(row)
    }
}

/// No HAVING clause
#[derive(Debug, Clone, Copy, Default)]
pub struct HavingAll;

impl Having for HavingAll {
    fn admits(&self, _row: &Row) -> bool {
        true
    }
}
