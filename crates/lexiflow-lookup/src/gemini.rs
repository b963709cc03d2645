use async_trait::async_trait;
use lexiflow_config::lookup::LookupConfig;
use lexiflow_types::DictionaryEntry;
use serde_json::{Value, json};

use crate::{LookupError, LookupProvider, MAX_SUGGESTIONS, MIN_QUERY_CHARS, prompt, schema};

/// Lookup provider backed by the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiLookup {
    client: reqwest::Client,
    config: LookupConfig,
}

impl GeminiLookup {
    pub fn new(config: LookupConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn generate(&self, model: &str, body: Value) -> Result<Value, LookupError> {
        if self.config.api_key.is_empty() {
            return Err(LookupError::Authentication);
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(LookupError::RateLimited);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(LookupError::Authentication);
        }

        if !response.status().is_success() {
            return Err(LookupError::Api(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(format!("not JSON: {e}")))
    }
}

#[async_trait]
impl LookupProvider for GeminiLookup {
    async fn fetch_entry(&self, word: &str) -> Result<DictionaryEntry, LookupError> {
        let query = prompt::normalize_query(word);
        if query.is_empty() {
            return Err(LookupError::NotFound);
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::entry_prompt(&query) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::dictionary_schema(),
            },
        });

        let response = self.generate(&self.config.model, body).await?;
        let text = response_text(&response).ok_or(LookupError::NotFound)?;
        parse_entry_text(text)
    }

    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let query = prompt::normalize_query(query);
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::suggestion_prompt(&query) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::suggestion_schema(),
            },
        });

        let response = self.generate(&self.config.model, body).await?;
        let text = response_text(&response).unwrap_or("[]");
        Ok(parse_suggestions_text(text))
    }

    async fn fetch_audio(&self, word: &str) -> Result<Option<String>, LookupError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt::audio_prompt(word) }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": self.config.tts_voice }
                    }
                },
            },
        });

        let response = self.generate(&self.config.tts_model, body).await?;
        Ok(response_inline_data(&response))
    }
}

/// First text part of the first candidate, if any.
fn response_text(response: &Value) -> Option<&str> {
    response
        .pointer("/candidates/0/content/parts/0/text")?
        .as_str()
}

/// Inline binary payload (base64 text) of the first candidate, if any.
fn response_inline_data(response: &Value) -> Option<String> {
    response
        .pointer("/candidates/0/content/parts/0/inlineData/data")?
        .as_str()
        .map(str::to_string)
}

/// Parse and validate the model's JSON text into a dictionary entry.
pub fn parse_entry_text(text: &str) -> Result<DictionaryEntry, LookupError> {
    if text.trim().is_empty() {
        return Err(LookupError::NotFound);
    }

    let entry: DictionaryEntry = serde_json::from_str(text)
        .map_err(|e| LookupError::InvalidResponse(format!("entry shape mismatch: {e}")))?;
    validate_entry(&entry)?;
    Ok(entry)
}

/// Shape checks serde cannot express: no degenerate definitions.
pub fn validate_entry(entry: &DictionaryEntry) -> Result<(), LookupError> {
    if entry.word.trim().is_empty() {
        return Err(LookupError::InvalidResponse("empty headword".to_string()));
    }

    for def in &entry.definitions {
        if def.meaning.trim().is_empty() {
            return Err(LookupError::InvalidResponse(
                "definition with empty meaning".to_string(),
            ));
        }
    }

    Ok(())
}

/// Suggestions are best-effort: any parse failure yields an empty list.
pub fn parse_suggestions_text(text: &str) -> Vec<String> {
    let mut suggestions: Vec<String> =
        serde_json::from_str(text).unwrap_or_else(|e| {
            tracing::debug!("unparsable suggestion payload: {e}");
            Vec::new()
        });
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
