use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lexiflow_audio::{AudioError, PlaybackSink, Pronouncer, SpeechSynth};
use lexiflow_config::Config;
use lexiflow_lookup::{LookupError, LookupProvider};
use lexiflow_store::MemoryStore;
use lexiflow_types::{DictionaryEntry, WordDefinition};

use crate::events::LookupContext;
use crate::state::AppState;

pub fn entry(word: &str) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        ipa: String::new(),
        definitions: vec![WordDefinition {
            pos: "noun".to_string(),
            pattern: None,
            meaning: format!("meaning of {word}"),
            examples: vec![],
            collocations: None,
        }],
        phrasal_verbs: None,
        synonyms: vec![],
        antonyms: vec![],
        derivatives: None,
        origin: None,
        usage_note: None,
        frequency: None,
        translation: None,
    }
}

/// Echoes every looked-up word back as an entry, or fails every lookup
/// when `failing` is set. Counts suggestion fetches.
pub struct FakeProvider {
    pub failing: bool,
    pub suggestion_fetches: AtomicUsize,
    pub suggestions: Vec<String>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            failing: false,
            suggestion_fetches: AtomicUsize::new(0),
            suggestions: Vec::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl LookupProvider for FakeProvider {
    async fn fetch_entry(&self, word: &str) -> Result<DictionaryEntry, LookupError> {
        if self.failing {
            return Err(LookupError::NotFound);
        }
        Ok(entry(word))
    }

    async fn fetch_suggestions(&self, _query: &str) -> Result<Vec<String>, LookupError> {
        self.suggestion_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.suggestions.clone())
    }

    async fn fetch_audio(&self, _word: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

pub struct NullSink;

impl PlaybackSink for NullSink {
    fn play(&self, _samples: Vec<f32>, _sample_rate: u32) -> Result<(), AudioError> {
        Ok(())
    }
}

pub struct NullSpeech;

impl SpeechSynth for NullSpeech {
    fn speak(&self, _text: &str, _locale: &str) -> Result<(), AudioError> {
        Ok(())
    }
}

pub struct Harness {
    pub ctx: LookupContext,
    pub store: Arc<MemoryStore>,
    pub app_to_ui_rx: kanal::AsyncReceiver<lexiflow_types::AppEvent>,
}

/// Wires a context with fakes around a shared in-memory store.
pub fn harness(provider: Arc<FakeProvider>) -> Harness {
    let store = Arc::new(MemoryStore::new());
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(64);

    let pronouncer = Arc::new(Pronouncer::new(
        provider.clone(),
        Arc::new(NullSink),
        Arc::new(NullSpeech),
        24000,
        "en-US".to_string(),
    ));

    let ctx = LookupContext::new(
        Arc::new(AppState::new(Config::default())),
        provider,
        store.clone(),
        pronouncer,
        app_to_ui_tx,
    );

    Harness {
        ctx,
        store,
        app_to_ui_rx,
    }
}
