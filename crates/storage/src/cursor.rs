// ============================================================================
// TableCursor
// ============================================================================

use crate::Row;

/// Restartable forward cursor over a table's rows
///
/// A cursor is either not started, or positioned on a current row. `advance`
/// steps forward and returns the new current row; `peek_current` re-reads the
/// current row without moving. There is no reverse step: to reread from the
/// top, `restart` and advance again.
#[derive(Debug, Clone)]
pub struct TableCursor<'a> {
    rows: &'a [Row],
    position: Option<usize>,
}

impl<'a> TableCursor<'a> {
    pub fn new(rows: &'a [Row]) -> Self {
        TableCursor { rows, position: None }
    }

    /// True if `advance` would return a row
    pub fn has_next(&self) -> bool {
        self.next_position() < self.rows.len()
    }

    /// Step to the next row and return it, `None` once exhausted
    ///
    /// An exhausted cursor stays on its last row.
    pub fn advance(&mut self) -> Option<&'a Row> {
        let next = self.next_position();
        let row = self.rows.get(next)?;
        self.position = Some(next);
        Some(row)
    }

    /// The row returned by the last `advance`, without moving
    pub fn peek_current(&self) -> Option<&'a Row> {
        self.position.and_then(|pos| self.rows.get(pos))
    }

    /// Rewind to before the first row
    pub fn restart(&mut self) {
        self.position = None;
    }

    pub fn is_started(&self) -> bool {
        self.position.is_some()
    }

    /// Number of rows the cursor walks
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    fn next_position(&self) -> usize {
        self.position.map_or(0, |pos| pos + 1)
    }
}
