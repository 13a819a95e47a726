#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutorError {
    /// Output column list and aggregate operation list differ in length
    #[error("SELECT list has {columns} output columns but {operations} operations")]
    SelectArityMismatch { columns: usize, operations: usize },
    #[error("Cross product of {row_tuples} row combinations exceeds the limit of {limit}")]
    RowLimitExceeded { row_tuples: usize, limit: usize },
    #[error("Table '{0}' not found")]
    TableNotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
    #[error("Invalid executor configuration: {0}")]
    Config(String),
}
