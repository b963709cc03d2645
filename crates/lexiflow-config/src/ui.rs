use std::env;

use serde::{Deserialize, Serialize};

fn default_suggestion_debounce_ms() -> u64 {
    300
}

fn default_recent_words() -> usize {
    12
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Idle window after a keystroke before a suggestion fetch fires.
    #[serde(default = "default_suggestion_debounce_ms")]
    pub suggestion_debounce_ms: u64,
    /// How many recent searches the empty search view shows.
    #[serde(default = "default_recent_words")]
    pub recent_words: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let suggestion_debounce_ms = env::var("LEXIFLOW_SUGGESTION_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_suggestion_debounce_ms);

        let recent_words = env::var("LEXIFLOW_RECENT_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_recent_words);

        Self {
            suggestion_debounce_ms,
            recent_words,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            suggestion_debounce_ms: default_suggestion_debounce_ms(),
            recent_words: default_recent_words(),
        }
    }
}
