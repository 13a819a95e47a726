//! Types - Runtime SQL Values
//!
//! This crate provides the value representation shared by the storage and
//! executor crates:
//! - `SqlValue`, the runtime representation of a column value (including NULL)
//! - Equality and hashing usable for grouping and DISTINCT
//! - SQL comparison semantics plus a total sort order

mod sql_value;

pub use sql_value::{compare_for_sort, SqlValue};
