//! SELECT list: output columns and their incremental aggregate operations

use std::cmp::Ordering;
use std::fmt;

use types::SqlValue;

use super::tuple::{ColumnRef, RowTuple};
use crate::errors::ExecutorError;

/// Incremental aggregate operation for one output column
///
/// Called once per contributing row-tuple with the column's current value
/// (`None` before the first call) and returns the new value.
pub trait Aggregate {
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue;
}

impl<F> Aggregate for F
where
    F: Fn(Option<&SqlValue>, &RowTuple<'_>) -> SqlValue,
{
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue {
        self(current, tuple)
    }
}

/// Output column names paired, by position, with the operation computing each
///
/// The two lists are kept as given; [`Select::check_arity`] rejects a
/// mismatch before execution starts.
pub struct Select<'a> {
    columns: Vec<String>,
    operations: Vec<Box<dyn Aggregate + 'a>>,
}

impl<'a> Select<'a> {
    pub fn new(columns: Vec<String>, operations: Vec<Box<dyn Aggregate + 'a>>) -> Self {
        Select { columns, operations }
    }

    pub fn empty() -> Self {
        Select { columns: Vec::new(), operations: Vec::new() }
    }

    /// Append an output column
    pub fn column(mut self, name: impl Into<String>, operation: impl Aggregate + 'a) -> Self {
        self.columns.push(name.into());
        self.operations.push(Box::new(operation));
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn operations(&self) -> &[Box<dyn Aggregate + 'a>] {
        &self.operations
    }

    pub fn check_arity(&self) -> Result<(), ExecutorError> {
        if self.columns.len() != self.operations.len() {
            return Err(ExecutorError::SelectArityMismatch {
                columns: self.columns.len(),
                operations: self.operations.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Select<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("columns", &self.columns)
            .field("operations", &self.operations.len())
            .finish()
    }
}

fn current_count(current: Option<&SqlValue>) -> i64 {
    current.and_then(SqlValue::as_i64).unwrap_or(0)
}

/// COUNT(*): number of contributing row-tuples
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl Aggregate for Count {
    fn apply(&self, current: Option<&SqlValue>, _tuple: &RowTuple<'_>) -> SqlValue {
        SqlValue::Integer(current_count(current) + 1)
    }
}

/// COUNT(column): number of non-NULL values
#[derive(Debug, Clone)]
pub struct CountColumn(pub ColumnRef);

impl CountColumn {
    pub fn new(column: impl Into<ColumnRef>) -> Self {
        CountColumn(column.into())
    }
}

impl Aggregate for CountColumn {
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue {
        let seen = if self.0.eval(tuple).is_null() { 0 } else { 1 };
        SqlValue::Integer(current_count(current) + seen)
    }
}

/// SUM(column): ignores NULL and non-numeric values; NULL until a number is seen
///
/// Integers stay integers until the sum overflows or meets a double.
#[derive(Debug, Clone)]
pub struct Sum(pub ColumnRef);

impl Sum {
    pub fn new(column: impl Into<ColumnRef>) -> Self {
        Sum(column.into())
    }
}

impl Aggregate for Sum {
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue {
        let current = current.cloned().unwrap_or(SqlValue::Null);
        let value = self.0.eval(tuple);

        match (current, value) {
            (SqlValue::Integer(a), SqlValue::Integer(b)) => match a.checked_add(b) {
                Some(sum) => SqlValue::Integer(sum),
                None => SqlValue::Double(a as f64 + b as f64),
            },
            (SqlValue::Null, value @ (SqlValue::Integer(_) | SqlValue::Double(_))) => value,
            (current, value) => match (current.as_f64(), value.as_f64()) {
                (Some(a), Some(b)) => SqlValue::Double(a + b),
                _ => current,
            },
        }
    }
}

fn pick_extreme(current: Option<&SqlValue>, value: SqlValue, keep: Ordering) -> SqlValue {
    match current {
        None => value,
        Some(current) if current.is_null() => value,
        Some(current) if value.is_null() => current.clone(),
        Some(current) => {
            if value.partial_cmp(current) == Some(keep) {
                value
            } else {
                current.clone()
            }
        }
    }
}

/// MIN(column): ignores NULL
#[derive(Debug, Clone)]
pub struct Min(pub ColumnRef);

impl Min {
    pub fn new(column: impl Into<ColumnRef>) -> Self {
        Min(column.into())
    }
}

impl Aggregate for Min {
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue {
        pick_extreme(current, self.0.eval(tuple), Ordering::Less)
    }
}

/// MAX(column): ignores NULL
#[derive(Debug, Clone)]
pub struct Max(pub ColumnRef);

impl Max {
    pub fn new(column: impl Into<ColumnRef>) -> Self {
        Max(column.into())
    }
}

impl Aggregate for Max {
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue {
        pick_extreme(current, self.0.eval(tuple), Ordering::Greater)
    }
}

/// Value of a column in the first contributing row-tuple
///
/// Used for plain (grouped) columns in the select list.
#[derive(Debug, Clone)]
pub struct FirstValue(pub ColumnRef);

impl FirstValue {
    pub fn new(column: impl Into<ColumnRef>) -> Self {
        FirstValue(column.into())
    }
}

impl Aggregate for FirstValue {
    fn apply(&self, current: Option<&SqlValue>, tuple: &RowTuple<'_>) -> SqlValue {
        match current {
            Some(value) => value.clone(),
            None => self.0.eval(tuple),
        }
    }
}
