use std::env;

use serde::{Deserialize, Serialize};

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_tts_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_tts_voice() -> String {
    "Puck".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Model used for entry lookups and suggestions.
    #[serde(default = "default_model")]
    pub model: String,
    /// Model used for speech synthesis.
    #[serde(default = "default_tts_model")]
    pub tts_model: String,
    #[serde(default = "default_tts_voice")]
    pub tts_voice: String,
}

impl LookupConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let api_base_url =
            env::var("GEMINI_API_BASE_URL").unwrap_or_else(|_| default_api_base_url());
        let model = env::var("LEXIFLOW_MODEL").unwrap_or_else(|_| default_model());
        let tts_model = env::var("LEXIFLOW_TTS_MODEL").unwrap_or_else(|_| default_tts_model());
        let tts_voice = env::var("LEXIFLOW_TTS_VOICE").unwrap_or_else(|_| default_tts_voice());

        Self {
            api_key,
            api_base_url,
            model,
            tts_model,
            tts_voice,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            model: default_model(),
            tts_model: default_tts_model(),
            tts_voice: default_tts_voice(),
        }
    }
}
