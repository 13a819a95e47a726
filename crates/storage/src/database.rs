// ============================================================================
// Database
// ============================================================================

use std::collections::HashMap;

use crate::{Row, StorageError, Table};

/// In-memory database - a named collection of tables
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: HashMap<String, Table>,
}

impl Database {
    /// Create a new empty database
    pub fn new() -> Self {
        Database { tables: HashMap::new() }
    }

    /// Create an empty table
    pub fn create_table<I, S>(&mut self, name: &str, columns: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.tables.contains_key(name) {
            return Err(StorageError::TableAlreadyExists(name.to_string()));
        }

        let table = Table::new(name, columns.into_iter().map(Into::into).collect());
        log::debug!("created table '{}' with columns {:?}", name, table.columns());
        self.tables.insert(name.to_string(), table);
        Ok(())
    }

    /// Insert a row into a named table
    pub fn insert_row(&mut self, name: &str, row: Row) -> Result<(), StorageError> {
        let table = self
            .tables
            .get_mut(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))?;
        table.insert(row)
    }

    /// Get a table for reading
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get a table for writing
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Drop a table
    pub fn drop_table(&mut self, name: &str) -> Result<(), StorageError> {
        let table = self
            .tables
            .remove(name)
            .ok_or_else(|| StorageError::TableNotFound(name.to_string()))?;
        log::debug!("dropped table '{}' ({} rows)", name, table.row_count());
        Ok(())
    }

    /// Names of all tables, sorted
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }
}
