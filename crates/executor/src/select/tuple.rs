//! Row-tuples: one row per source table

use storage::Row;
use types::SqlValue;

/// Reference to a column of a row-tuple
///
/// An unqualified reference resolves against the first table whose row holds
/// the column; a qualified one names the table by its position in FROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: Option<usize>,
    pub column: String,
}

impl ColumnRef {
    pub fn new(column: impl Into<String>) -> Self {
        ColumnRef { table: None, column: column.into() }
    }

    pub fn qualified(table: usize, column: impl Into<String>) -> Self {
        ColumnRef { table: Some(table), column: column.into() }
    }

    /// Resolve against a row-tuple; NULL when the column is absent
    pub fn eval(&self, tuple: &RowTuple<'_>) -> SqlValue {
        let value = match self.table {
            Some(index) => tuple.qualified(index, &self.column),
            None => tuple.value(&self.column),
        };
        value.cloned().unwrap_or(SqlValue::Null)
    }
}

impl From<&str> for ColumnRef {
    fn from(column: &str) -> Self {
        ColumnRef::new(column)
    }
}

impl From<String> for ColumnRef {
    fn from(column: String) -> Self {
        ColumnRef::new(column)
    }
}

impl From<(usize, &str)> for ColumnRef {
    fn from((table, column): (usize, &str)) -> Self {
        ColumnRef::qualified(table, column)
    }
}

/// One element of the cross product: a row from each source table, in FROM order
#[derive(Debug, Clone, PartialEq)]
pub struct RowTuple<'a> {
    rows: Vec<&'a Row>,
}

impl<'a> RowTuple<'a> {
    pub fn new(rows: Vec<&'a Row>) -> Self {
        RowTuple { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row contributed by the table at `index`
    pub fn get(&self, index: usize) -> Option<&'a Row> {
        self.rows.get(index).copied()
    }

    pub fn rows(&self) -> &[&'a Row] {
        &self.rows
    }

    /// Value of `column` from the first row that holds it
    pub fn value(&self, column: &str) -> Option<&'a SqlValue> {
        self.rows.iter().find_map(|&row| row.get(column))
    }

    /// Value of `column` from the row of table `index`
    pub fn qualified(&self, index: usize, column: &str) -> Option<&'a SqlValue> {
        self.get(index).and_then(|row| row.get(column))
    }
}
