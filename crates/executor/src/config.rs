//! Executor configuration
//!
//! Loaded from TOML or built in code; every field has a default.
//!
//! ```toml
//! group_index = "hashed"
//! max_row_tuples = 500000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{errors::ExecutorError, limits::MAX_ROWS_PROCESSED};

/// How the group accumulator finds an existing group for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupIndex {
    /// Scan groups in creation order, O(groups) per lookup
    #[default]
    Linear,
    /// Hash index on the group key; lookups are O(1), group order is unchanged
    Hashed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    pub group_index: GroupIndex,
    /// Upper bound on the number of row combinations the cross join may produce
    pub max_row_tuples: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { group_index: GroupIndex::Linear, max_row_tuples: MAX_ROWS_PROCESSED }
    }
}

impl ExecutorConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ExecutorError> {
        toml::from_str(contents).map_err(|e| ExecutorError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ExecutorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ExecutorError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn with_group_index(mut self, group_index: GroupIndex) -> Self {
        self.group_index = group_index;
        self
    }

    pub fn with_max_row_tuples(mut self, max_row_tuples: usize) -> Self {
        self.max_row_tuples = max_row_tuples;
        self
    }
}
