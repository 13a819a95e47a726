//! SelectExecutor: the single-pass evaluation loop

use log::{debug, trace};
use storage::Table;

use super::aggregates::Select;
use super::cross_product::CrossProduct;
use super::filter::{Having, HavingAll, Where, WhereAll};
use super::grouping::{GroupAccumulator, GroupBy, GroupHandle, SingleGroup};
use super::order::OrderBy;
use super::source::TableSource;
use crate::{config::ExecutorConfig, errors::ExecutorError};

/// A resolved SELECT: every clause is an injected behavior object
///
/// Defaults: no WHERE, a single group, no HAVING, no DISTINCT, no ORDER BY.
pub struct SelectStmt<'a> {
    pub select: Select<'a>,
    pub where_clause: Box<dyn Where + 'a>,
    pub group_by: Box<dyn GroupBy + 'a>,
    pub having: Box<dyn Having + 'a>,
    pub order_by: Option<Box<dyn OrderBy + 'a>>,
    pub distinct: bool,
}

impl<'a> SelectStmt<'a> {
    pub fn new(select: Select<'a>) -> Self {
        SelectStmt {
            select,
            where_clause: Box::new(WhereAll),
            group_by: Box::new(SingleGroup),
            having: Box::new(HavingAll),
            order_by: None,
            distinct: false,
        }
    }

    pub fn where_clause(mut self, filter: impl Where + 'a) -> Self {
        self.where_clause = Box::new(filter);
        self
    }

    pub fn group_by(mut self, group_by: impl GroupBy + 'a) -> Self {
        self.group_by = Box::new(group_by);
        self
    }

    pub fn having(mut self, having: impl Having + 'a) -> Self {
        self.having = Box::new(having);
        self
    }

    pub fn order_by(mut self, order_by: impl OrderBy + 'a) -> Self {
        self.order_by = Some(Box::new(order_by));
        self
    }

    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }
}

/// Executes SELECT statements
#[derive(Debug, Clone, Default)]
pub struct SelectExecutor {
    config: ExecutorConfig,
}

impl SelectExecutor {
    /// Create a new SELECT executor with the default configuration
    pub fn new() -> Self {
        SelectExecutor { config: ExecutorConfig::default() }
    }

    pub fn with_config(config: ExecutorConfig) -> Self {
        SelectExecutor { config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Execute a SELECT statement over the tables of `source`
    ///
    /// Configuration errors are reported before any row is looked at. Each
    /// row-tuple of the cross join that passes WHERE is folded into its
    /// group. HAVING and DISTINCT are checked once, when the group is created;
    /// an admitted group keeps accumulating afterwards and its final values
    /// are what the result holds. A group rejected at creation never appears.
    pub fn execute<S>(&self, stmt: &SelectStmt<'_>, source: &S) -> Result<Table, ExecutorError>
    where
        S: TableSource + ?Sized,
    {
        stmt.select.check_arity()?;

        let tables = source.tables()?;
        let mut product = CrossProduct::new(&tables);
        if product.total() > self.config.max_row_tuples {
            return Err(ExecutorError::RowLimitExceeded {
                row_tuples: product.total(),
                limit: self.config.max_row_tuples,
            });
        }

        debug!(
            "executing SELECT over {} table(s), {} row-tuple(s), group index {:?}",
            tables.len(),
            product.total(),
            self.config.group_index
        );

        let mut groups = GroupAccumulator::new(self.config.group_index);
        let mut admitted: Vec<GroupHandle> = Vec::new();
        let mut row_tuples = 0usize;

        while let Some(tuple) = product.advance() {
            row_tuples += 1;
            if !stmt.where_clause.accepts(&tuple) {
                continue;
            }

            let (handle, created) = groups.lookup_or_create(stmt.group_by.as_ref(), &tuple);
            groups.update(handle, &stmt.select, &tuple);

            if !created {
                continue;
            }

            let row = groups.row(handle);
            if !stmt.having.admits(row) {
                trace!("group #{} rejected by HAVING", handle.index());
                continue;
            }
            if stmt.distinct && admitted.iter().any(|&other| groups.row(other) == row) {
                trace!("group #{} dropped as a duplicate row", handle.index());
                continue;
            }
            admitted.push(handle);
        }

        debug!(
            "SELECT consumed {} row-tuple(s) into {} group(s), {} admitted",
            row_tuples,
            groups.len(),
            admitted.len()
        );

        let mut result = Table::with_columns(stmt.select.columns().iter().cloned());
        for row in groups.into_rows(&admitted) {
            result.insert(row)?;
        }

        if let Some(order_by) = &stmt.order_by {
            result.sort_by(|a, b| order_by.compare(a, b));
        }

        Ok(result)
    }
}
