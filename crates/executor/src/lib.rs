//! Executor - SELECT Evaluation Engine
//!
//! This crate evaluates an already-resolved SELECT over in-memory tables in a
//! single pass: cross join, WHERE, GROUP BY, incremental aggregation, HAVING,
//! DISTINCT and ORDER BY. Query behavior is injected through the collaborator
//! traits in [`select`].

pub mod config;
pub mod errors;
pub mod limits;
pub mod select;

pub use config::{ExecutorConfig, GroupIndex};
pub use errors::ExecutorError;
pub use select::{
    Aggregate, ColumnRef, ColumnsEqual, Count, CountColumn, CrossProduct, FirstValue,
    FromTables, GroupAccumulator, GroupBy, GroupByColumns, GroupHandle, GroupKey, Having,
    HavingAll, Max, Min, OrderBy, OrderByColumns, OrderDirection, RowTuple, Select,
    SelectExecutor, SelectStmt, SingleGroup, Sum, TableSource, Where, WhereAll,
};

#[cfg(test)]
mod tests;
