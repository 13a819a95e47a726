//! HAVING tests
//!
//! HAVING is evaluated once, right after the row-tuple that creates a group
//! has been folded in. Later row-tuples never re-open the decision.

use super::*;
use crate::{Count, FirstValue, GroupByColumns, Select, SelectExecutor, SelectStmt, Sum};
use types::SqlValue;

fn count_at_least(n: i64) -> impl Fn(&Row) -> bool {
    move |row: &Row| row.get("cnt").and_then(SqlValue::as_i64).is_some_and(|c| c >= n)
}

#[test]
fn test_having_sees_only_first_row_tuple() {
    let t = int_table("t", "k", &[7, 7]);
    let stmt = SelectStmt::new(Select::empty().column("cnt", Count))
        .group_by(GroupByColumns::new(["k"]))
        .having(count_at_least(2));

    let result = SelectExecutor::new().execute(&stmt, &[&t]).unwrap();
    // The group reaches cnt = 2, but it was rejected at cnt = 1
    assert!(result.is_empty());
}

#[test]
fn test_admitted_group_keeps_accumulating() {
    let t = int_table("t", "k", &[1, 1, 1, 2]);
    let stmt = SelectStmt::new(Select::empty().column("k", FirstValue::new("k")).column("cnt", Count))
        .group_by(GroupByColumns::new(["k"]))
        .having(count_at_least(1));

    let result = SelectExecutor::new().execute(&stmt, &[&t]).unwrap();
    assert_eq!(
        result.rows(),
        &[Row::new().with("k", 1).with("cnt", 3), Row::new().with("k", 2).with("cnt", 1)]
    );
}

#[test]
fn test_having_filters_on_first_value() {
    let sales = table(
        "sales",
        &["dept", "amount"],
        &[
            &[SqlValue::Integer(1), SqlValue::Integer(5)],
            &[SqlValue::Integer(2), SqlValue::Integer(500)],
            &[SqlValue::Integer(1), SqlValue::Integer(1000)],
            &[SqlValue::Integer(2), SqlValue::Integer(1)],
        ],
    );
    let stmt = SelectStmt::new(Select::empty().column("total", Sum::new("amount")))
        .group_by(GroupByColumns::new(["dept"]))
        .having(|row: &Row| row.get("total").and_then(SqlValue::as_i64).is_some_and(|t| t > 100));

    let result = SelectExecutor::new().execute(&stmt, &[&sales]).unwrap();
    // dept 1 starts at 5 and is rejected even though it ends at 1005;
    // dept 2 starts at 500, is admitted, and ends at 501
    assert_eq!(result.rows(), &[Row::new().with("total", 501)]);
}

#[test]
fn test_having_rejects_everything() {
    let t = int_table("t", "k", &[1, 2, 3]);
    let stmt = SelectStmt::new(Select::empty().column("cnt", Count))
        .group_by(GroupByColumns::new(["k"]))
        .having(|_: &Row| false);
    let result = SelectExecutor::new().execute(&stmt, &[&t]).unwrap();
    assert!(result.is_empty());
}
