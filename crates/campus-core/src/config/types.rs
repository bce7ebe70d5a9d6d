//! Configuration type definitions

use crate::graph::types::{DuplicateWalkwayPolicy, RouteLimits};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default depth of the event undo/redo histories
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Campus tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// Campus dataset file (JSON, TOML or YAML); the bundled campus when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Default bounds for route enumeration
    #[serde(default)]
    pub routes: RouteLimits,

    /// Event log settings
    #[serde(default)]
    pub events: EventsConfig,

    /// Task queue settings
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Configuration for graph construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub duplicate_walkways: DuplicateWalkwayPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Maximum retained undo (and redo) entries
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Maximum pending tasks; unlimited when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
