//! SELECT evaluation
//!
//! Data flows one row-tuple at a time:
//!
//! ```text
//! CrossProduct -> WHERE -> GroupAccumulator (lookup/create, update)
//!              -> HAVING + DISTINCT (new groups only) -> result Table -> ORDER BY
//! ```

mod aggregates;
mod cross_product;
mod executor;
mod filter;
mod grouping;
mod order;
mod source;
mod tuple;

pub use aggregates::{Aggregate, Count, CountColumn, FirstValue, Max, Min, Select, Sum};
pub use cross_product::CrossProduct;
pub use executor::{SelectExecutor, SelectStmt};
pub use filter::{ColumnsEqual, Having, HavingAll, Where, WhereAll};
pub use grouping::{GroupAccumulator, GroupBy, GroupByColumns, GroupHandle, GroupKey, SingleGroup};
pub use order::{OrderBy, OrderByColumns, OrderDirection};
pub use source::{FromTables, TableSource};
pub use tuple::{ColumnRef, RowTuple};
