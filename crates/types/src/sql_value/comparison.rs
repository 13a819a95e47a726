//! Comparison implementations for SqlValue

use std::cmp::Ordering;

use crate::sql_value::SqlValue;

/// Structural equality used for GROUP BY keys and DISTINCT
///
/// Unlike SQL comparison:
/// - NULL == NULL
/// - NaN == NaN
/// - Values of different variants are never equal (1 != 1.0)
impl PartialEq for SqlValue {
    fn eq(&self, other: &Self) -> bool {
        use SqlValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (Double(a), Double(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Varchar(a), Varchar(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}

impl Eq for SqlValue {}

/// PartialOrd implementation for SQL value comparison
///
/// - NULL comparisons return None (SQL UNKNOWN)
/// - Integer and Double compare numerically
/// - Other type mismatches return None (incomparable)
/// - NaN returns None (IEEE 754 semantics)
impl PartialOrd for SqlValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use SqlValue::*;
        match (self, other) {
            (Null, _) | (_, Null) => None,

            (Integer(a), Integer(b)) => a.partial_cmp(b),
            (Double(a), Double(b)) => a.partial_cmp(b),
            (Integer(a), Double(b)) => (*a as f64).partial_cmp(b),
            (Double(a), Integer(b)) => a.partial_cmp(&(*b as f64)),

            (Varchar(a), Varchar(b)) => a.partial_cmp(b),

            // false < true
            (Boolean(a), Boolean(b)) => a.partial_cmp(b),

            _ => None,
        }
    }
}

/// Compare two SqlValues for ordering purposes (ORDER BY semantics)
///
/// - NULL values sort last
/// - Incomparable values are Equal so a stable sort keeps their input order
pub fn compare_for_sort(a: &SqlValue, b: &SqlValue) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}
