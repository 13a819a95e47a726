//! Storage - In-Memory Data Storage
//!
//! This crate provides in-memory storage for tables and rows, plus the
//! restartable cursors the executor uses to walk them.

pub mod cursor;
pub mod database;
pub mod error;
pub mod row;
pub mod table;

pub use cursor::TableCursor;
pub use database::Database;
pub use error::StorageError;
pub use row::Row;
pub use table::Table;

#[cfg(test)]
mod tests;
