use std::env;

use serde::{Deserialize, Serialize};

fn default_sample_rate() -> u32 {
    24000
}

fn default_speech_locale() -> String {
    "en-US".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate of the synthesized PCM payload.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Locale handed to the platform speech-synthesis fallback.
    #[serde(default = "default_speech_locale")]
    pub speech_locale: String,
}

impl AudioConfig {
    pub fn new() -> Self {
        let sample_rate = env::var("LEXIFLOW_SAMPLE_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sample_rate);

        let speech_locale =
            env::var("LEXIFLOW_SPEECH_LOCALE").unwrap_or_else(|_| default_speech_locale());

        Self {
            sample_rate,
            speech_locale,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            speech_locale: default_speech_locale(),
        }
    }
}
