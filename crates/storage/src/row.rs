use indexmap::IndexMap;
use types::SqlValue;

/// A single row of data - column name to value, in column insertion order
///
/// Equality compares column sets and values; column order is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: IndexMap<String, SqlValue>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Row { values: IndexMap::new() }
    }

    /// Get value of a column
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values.get(column)
    }

    pub fn get_mut(&mut self, column: &str) -> Option<&mut SqlValue> {
        self.values.get_mut(column)
    }

    /// Set a column, overwriting in place. Returns the previous value.
    ///
    /// An overwritten column keeps its original position.
    pub fn put(&mut self, column: impl Into<String>, value: SqlValue) -> Option<SqlValue> {
        self.values.insert(column.into(), value)
    }

    /// Builder-style `put`
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.put(column, value.into());
        self
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.values.values()
    }

    /// (column, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get number of columns in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if row is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<SqlValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
