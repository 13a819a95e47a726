//! Cross join over any number of tables

use storage::{Table, TableCursor};

use super::tuple::RowTuple;

/// Enumerates every combination of one row per table exactly once
///
/// Works like an odometer: each table is a digit whose radix is its row
/// count. The last table is the fastest-varying digit and the first the
/// slowest, which reproduces the order of nested loops with the first table
/// outermost.
///
/// ```text
/// A = [a1, a2], B = [b1, b2]
/// (a1, b1) (a1, b2) (a2, b1) (a2, b2)
/// ```
///
/// With no tables, or any empty table, there are no combinations.
#[derive(Debug, Clone)]
pub struct CrossProduct<'a> {
    cursors: Vec<TableCursor<'a>>,
    /// True when no combination exists at all
    exhausted_up_front: bool,
    total: usize,
    produced: usize,
}

impl<'a> CrossProduct<'a> {
    pub fn new(tables: &[&'a Table]) -> Self {
        let exhausted_up_front = tables.is_empty() || tables.iter().any(|t| t.is_empty());
        let total = if tables.is_empty() {
            0
        } else {
            tables.iter().fold(1usize, |acc, t| acc.saturating_mul(t.row_count()))
        };

        CrossProduct {
            cursors: tables.iter().map(|&t| t.cursor()).collect(),
            exhausted_up_front,
            total,
            produced: 0,
        }
    }

    /// Number of combinations the full enumeration yields (saturating)
    pub fn total(&self) -> usize {
        self.total
    }

    /// True while at least one more combination remains
    ///
    /// Becomes false once every cursor sits on its last row, i.e. right after
    /// the last combination was returned.
    pub fn has_more(&self) -> bool {
        !self.exhausted_up_front && self.cursors.iter().any(|c| !c.is_started() || c.has_next())
    }

    /// Produce the next combination
    ///
    /// Steps the fastest digit. A digit that runs out (or has not started)
    /// restarts at its first row and carries into the next slower digit.
    /// Digits that receive no carry keep their current row.
    pub fn advance(&mut self) -> Option<RowTuple<'a>> {
        if !self.has_more() {
            return None;
        }

        let mut rows = Vec::with_capacity(self.cursors.len());
        let mut carry = true;

        for cursor in self.cursors.iter_mut().rev() {
            let row = if !cursor.is_started() || (carry && !cursor.has_next()) {
                cursor.restart();
                cursor.advance()
            } else if carry {
                carry = false;
                cursor.advance()
            } else {
                cursor.peek_current()
            };
            rows.push(row?);
        }

        rows.reverse();
        self.produced += 1;
        Some(RowTuple::new(rows))
    }
}

impl<'a> Iterator for CrossProduct<'a> {
    type Item = RowTuple<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.has_more() { self.total.saturating_sub(self.produced) } else { 0 };
        (remaining, Some(remaining))
    }
}
