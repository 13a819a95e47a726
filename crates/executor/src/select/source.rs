//! FROM clause: the ordered list of tables to cross join

use storage::{Database, Table};

use crate::errors::ExecutorError;

/// Supplies the source tables of a SELECT, in FROM order
pub trait TableSource {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError>;
}

impl TableSource for [&Table] {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError> {
        Ok(self.to_vec())
    }
}

impl<const N: usize> TableSource for [&Table; N] {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError> {
        Ok(self.to_vec())
    }
}

impl TableSource for Vec<&Table> {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError> {
        Ok(self.clone())
    }
}

impl TableSource for [Table] {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError> {
        Ok(self.iter().collect())
    }
}

impl TableSource for Vec<Table> {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError> {
        Ok(self.iter().collect())
    }
}

/// Tables named in FROM, resolved against a database
#[derive(Debug, Clone)]
pub struct FromTables<'a> {
    database: &'a Database,
    names: Vec<String>,
}

impl<'a> FromTables<'a> {
    pub fn new<I, S>(database: &'a Database, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FromTables { database, names: names.into_iter().map(Into::into).collect() }
    }
}

impl TableSource for FromTables<'_> {
    fn tables(&self) -> Result<Vec<&Table>, ExecutorError> {
        self.names
            .iter()
            .map(|name| {
                self.database
                    .get_table(name)
                    .ok_or_else(|| ExecutorError::TableNotFound(name.clone()))
            })
            .collect()
    }
}
