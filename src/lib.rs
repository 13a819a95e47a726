//! memselect - single-pass SELECT evaluation over in-memory tables
//!
//! This is the root crate that re-exports all components.

pub use executor;
pub use storage;
pub use types;
