use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::history::HistoryConfig;
use self::lookup::LookupConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod history;
pub mod lookup;
pub mod ui;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub lookup: LookupConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
    pub history: HistoryConfig,
}

impl Config {
    /// Build the config from environment variables, falling back to
    /// defaults for anything unset.
    pub fn new() -> Self {
        Config {
            lookup: LookupConfig::new(),
            audio: AudioConfig::new(),
            ui: UiConfig::new(),
            history: HistoryConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
