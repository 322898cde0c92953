//! Graph construction settings.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// What to do when a person is inserted under a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`GraphError::DuplicateName`] and keep the first record.
    #[default]
    Reject,
    /// Overwrite the existing record in place. Position and edges are kept.
    Replace,
}

/// Graph construction configuration.
///
/// ## Parameters
///
/// - `on_duplicate`: policy for repeated person names
/// - `dedup_edges`: drop repeated insertions of an already-present pair
///
/// The defaults keep every edge insertion, matching how acquaintance lists are
/// recorded in the text format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Policy for repeated person names.
    pub on_duplicate: DuplicatePolicy,
    /// Whether a repeated edge between the same pair is ignored.
    pub dedup_edges: bool,
}

impl GraphConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Builder: set the duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate = policy;
        self
    }

    /// Builder: enable or disable edge deduplication.
    pub fn with_dedup_edges(mut self, dedup: bool) -> Self {
        self.dedup_edges = dedup;
        self
    }
}
