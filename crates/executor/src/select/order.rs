//! ORDER BY sorting logic

use std::cmp::Ordering;

use storage::Row;
use types::{compare_for_sort, SqlValue};

/// Sort specification applied to the finished result
pub trait OrderBy {
    fn compare(&self, a: &Row, b: &Row) -> Ordering;
}

impl<F> OrderBy for F
where
    F: Fn(&Row, &Row) -> Ordering,
{
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// ORDER BY output columns
///
/// Keys are compared left to right; NULL (or a missing column) sorts last for
/// ASC and first for DESC. Ties keep admission order.
#[derive(Debug, Clone, Default)]
pub struct OrderByColumns {
    keys: Vec<(String, OrderDirection)>,
}

impl OrderByColumns {
    pub fn new() -> Self {
        OrderByColumns { keys: Vec::new() }
    }

    pub fn asc(mut self, column: impl Into<String>) -> Self {
        self.keys.push((column.into(), OrderDirection::Asc));
        self
    }

    pub fn desc(mut self, column: impl Into<String>) -> Self {
        self.keys.push((column.into(), OrderDirection::Desc));
        self
    }
}

impl OrderBy for OrderByColumns {
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        for (column, direction) in &self.keys {
            let val_a = a.get(column).unwrap_or(&SqlValue::Null);
            let val_b = b.get(column).unwrap_or(&SqlValue::Null);

            let cmp = match direction {
                OrderDirection::Asc => compare_for_sort(val_a, val_b),
                OrderDirection::Desc => compare_for_sort(val_a, val_b).reverse(),
            };

            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }
}
