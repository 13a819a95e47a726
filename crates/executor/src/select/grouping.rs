//! GROUP BY keys and the per-group accumulator state

use std::collections::HashMap;

use log::trace;
use storage::Row;
use types::SqlValue;

use super::aggregates::Select;
use super::tuple::{ColumnRef, RowTuple};
use crate::config::GroupIndex;

/// Grouping function: maps a row-tuple to its group key values
pub trait GroupBy {
    fn group_key(&self, tuple: &RowTuple<'_>) -> Vec<SqlValue>;
}

impl<F> GroupBy for F
where
    F: Fn(&RowTuple<'_>) -> Vec<SqlValue>,
{
    fn group_key(&self, tuple: &RowTuple<'_>) -> Vec<SqlValue> {
        self(tuple)
    }
}

/// No GROUP BY clause: every row-tuple lands in one group
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleGroup;

impl GroupBy for SingleGroup {
    fn group_key(&self, _tuple: &RowTuple<'_>) -> Vec<SqlValue> {
        Vec::new()
    }
}

/// GROUP BY a list of columns
#[derive(Debug, Clone, Default)]
pub struct GroupByColumns {
    columns: Vec<ColumnRef>,
}

impl GroupByColumns {
    pub fn new<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        GroupByColumns { columns: columns.into_iter().map(Into::into).collect() }
    }
}

impl GroupBy for GroupByColumns {
    fn group_key(&self, tuple: &RowTuple<'_>) -> Vec<SqlValue> {
        self.columns.iter().map(|column| column.eval(tuple)).collect()
    }
}

/// Group key tuple, compared element-wise
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(pub Vec<SqlValue>);

impl GroupKey {
    pub fn values(&self) -> &[SqlValue] {
        &self.0
    }
}

/// Stable handle to a group's accumulator row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(usize);

impl GroupHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct GroupEntry {
    key: GroupKey,
    row: Row,
}

/// Owns one accumulator row per distinct group key, in first-seen order
///
/// Other parts of the executor refer to a group through its [`GroupHandle`],
/// so updates made after a row is admitted to the output stay visible there.
#[derive(Debug)]
pub struct GroupAccumulator {
    entries: Vec<GroupEntry>,
    /// Present only with [`GroupIndex::Hashed`]
    index: Option<HashMap<GroupKey, usize>>,
}

impl GroupAccumulator {
    pub fn new(mode: GroupIndex) -> Self {
        let index = match mode {
            GroupIndex::Linear => None,
            GroupIndex::Hashed => Some(HashMap::new()),
        };
        GroupAccumulator { entries: Vec::new(), index }
    }

    /// Find the group for this row-tuple, creating an empty one if it is new
    ///
    /// Returns the group's handle and whether it was created by this call.
    pub fn lookup_or_create(
        &mut self,
        group_by: &dyn GroupBy,
        tuple: &RowTuple<'_>,
    ) -> (GroupHandle, bool) {
        let key = GroupKey(group_by.group_key(tuple));

        if let Some(position) = self.find(&key) {
            return (GroupHandle(position), false);
        }

        let position = self.entries.len();
        trace!("creating group #{} for key {:?}", position, key.values());
        if let Some(index) = self.index.as_mut() {
            index.insert(key.clone(), position);
        }
        self.entries.push(GroupEntry { key, row: Row::new() });
        (GroupHandle(position), true)
    }

    /// Position of the group with this key, if any
    pub fn find(&self, key: &GroupKey) -> Option<usize> {
        match &self.index {
            Some(index) => index.get(key).copied(),
            None => self.entries.iter().position(|entry| &entry.key == key),
        }
    }

    /// Fold one row-tuple into every output column of a group
    pub fn update(&mut self, handle: GroupHandle, select: &Select<'_>, tuple: &RowTuple<'_>) {
        let row = &mut self.entries[handle.0].row;
        for (column, operation) in select.columns().iter().zip(select.operations()) {
            let value = operation.apply(row.get(column), tuple);
            match row.get_mut(column) {
                Some(slot) => *slot = value,
                None => {
                    row.put(column.as_str(), value);
                }
            }
        }
    }

    pub fn row(&self, handle: GroupHandle) -> &Row {
        &self.entries[handle.0].row
    }

    pub fn key(&self, handle: GroupHandle) -> &GroupKey {
        &self.entries[handle.0].key
    }

    /// Number of groups created so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the accumulator, yielding the rows of `handles` in that order
    pub fn into_rows(self, handles: &[GroupHandle]) -> Vec<Row> {
        let mut rows: Vec<Option<Row>> = self.entries.into_iter().map(|e| Some(e.row)).collect();
        handles.iter().filter_map(|handle| rows.get_mut(handle.0).and_then(Option::take)).collect()
    }
}
