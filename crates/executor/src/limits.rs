//! Execution limits and safeguards
//!
//! Defaults for [`crate::ExecutorConfig`]. A cross join grows as the product
//! of its table sizes, so the evaluator checks the combination count against
//! these limits before enumerating anything.

/// Maximum number of row combinations a single SELECT may enumerate
///
/// Set high enough for legitimate large queries (10 million row-tuples)
pub const MAX_ROWS_PROCESSED: usize = 10_000_000;
