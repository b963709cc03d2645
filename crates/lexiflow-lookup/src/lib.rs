use async_trait::async_trait;
use lexiflow_types::DictionaryEntry;

pub mod gemini;
pub mod prompt;
pub mod schema;

pub use gemini::GeminiLookup;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on returned typeahead suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Lookup provider interface over the generative-AI service.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// Full structured entry for a word or phrase.
    async fn fetch_entry(&self, word: &str) -> Result<DictionaryEntry, LookupError>;

    /// Up to [`MAX_SUGGESTIONS`] typeahead suggestions. Best-effort: parse
    /// failures yield an empty list rather than an error.
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, LookupError>;

    /// Base64-encoded PCM payload for a spoken pronunciation, or `None`
    /// when the response carries no audio data.
    async fn fetch_audio(&self, word: &str) -> Result<Option<String>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("word not found")]
    NotFound,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("authentication error")]
    Authentication,

    #[error("rate limit exceeded")]
    RateLimited,
}
