//! Test modules for executor crate
//!
//! Tests are organized by feature area:
//! - `cross_product`: odometer enumeration order and counts
//! - `grouping`: group accumulator lookup/create/update, linear and hashed
//! - `aggregates`: built-in aggregate operations
//! - `select_basic`: end-to-end SELECT without grouping columns
//! - `select_group_by`: GROUP BY with aggregates
//! - `select_having`: creation-time HAVING gate
//! - `select_distinct`: DISTINCT on admission
//! - `select_order_by`: ORDER BY on the finished result
//! - `config`: ExecutorConfig defaults and TOML loading
//! - `error_display`: ExecutorError Display implementation tests

use storage::{Row, Table};

mod select_having;

/// Build a table from a column list and rows of values
pub(crate) fn table(name: &str, columns: &[&str], rows: &[&[types::SqlValue]]) -> Table {
    let mut table = Table::new(name, columns.iter().map(|c| c.to_string()).collect());
    for values in rows {
        let row: Row = columns.iter().copied().zip(values.iter().cloned()).collect();
        table.insert(row).unwrap();
    }
    table
}

/// Single-column integer table
pub(crate) fn int_table(name: &str, column: &str, values: &[i64]) -> Table {
    let mut table = Table::new(name, vec![column.to_string()]);
    for &value in values {
        table.insert(Row::new().with(column, value)).unwrap();
    }
    table
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
