// ============================================================================
// Table
// ============================================================================

use std::cmp::Ordering;

use crate::{Row, StorageError, TableCursor};

/// In-memory table - an ordered sequence of rows sharing one column list
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with given name and columns
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Table { name: name.into(), columns, rows: Vec::new() }
    }

    /// Create an unnamed empty table from a column list
    ///
    /// Used for query results.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table::new(String::new(), columns.into_iter().map(Into::into).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Append a row
    ///
    /// Every column of the row must belong to the table. Columns the row does
    /// not carry read as absent.
    pub fn insert(&mut self, row: Row) -> Result<(), StorageError> {
        if let Some(unknown) = row.columns().find(|c| !self.columns.iter().any(|col| col == *c)) {
            return Err(StorageError::ColumnNotFound {
                table: self.name.clone(),
                column: unknown.to_string(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    /// Get all rows (for scanning)
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Restartable cursor positioned before the first row
    pub fn cursor(&self) -> TableCursor<'_> {
        TableCursor::new(&self.rows)
    }

    /// Reorder rows in place (stable)
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        self.rows.sort_by(compare);
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clear all rows
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
