use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_limit() -> usize {
    100
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Hard cap on persisted history items.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Override for the history blob location; platform data dir otherwise.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let limit = env::var("LEXIFLOW_HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_limit);

        let path = env::var("LEXIFLOW_HISTORY_PATH").ok().map(PathBuf::from);

        Self { limit, path }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            path: None,
        }
    }
}
