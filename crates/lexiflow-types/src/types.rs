use serde::{Deserialize, Serialize};

/// Structured lexical entry for one headword or phrase.
///
/// `word`, `ipa`, `definitions`, `synonyms` and `antonyms` are always
/// present (possibly empty); the remaining fields are optional and are not
/// rendered when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub ipa: String,
    pub definitions: Vec<WordDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrasal_verbs: Option<Vec<PhrasalVerb>>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivatives: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationInfo>,
}

impl DictionaryEntry {
    /// Group definitions by lower-cased part of speech, preserving the
    /// order in which each group first appears.
    pub fn grouped_definitions(&self) -> Vec<(String, Vec<&WordDefinition>)> {
        let mut groups: Vec<(String, Vec<&WordDefinition>)> = Vec::new();
        for def in &self.definitions {
            let key = def.pos.to_lowercase();
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, defs)) => defs.push(def),
                None => groups.push((key, vec![def])),
            }
        }
        groups
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordDefinition {
    pub pos: String,
    /// Grammar pattern tag, e.g. "[C]", "[U]", "[T]", "[I]".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub meaning: String,
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collocations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasalVerb {
    pub phrase: String,
    pub meaning: String,
    pub examples: Vec<String>,
}

/// Coarse LDOCE-style commonness bands: S1-S3 spoken, W1-W3 written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frequency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub written: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationInfo {
    #[serde(rename = "sourceText")]
    pub source_text: String,
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    /// True when the input was a full sentence rather than a single word.
    #[serde(rename = "isSentence", default, skip_serializing_if = "Option::is_none")]
    pub is_sentence: Option<bool>,
}

/// One persisted history record. `timestamp` is milliseconds since epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub word: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Search,
    History,
}

/// Intents emitted by the presentation layer.
#[derive(Debug, Clone)]
pub enum UiEvent {
    Search { word: String, is_back_action: bool },
    /// Typeahead input changed; drives the debounced suggestion fetch.
    QueryChanged(String),
    GoBack,
    PlayAudio,
    SetView(ActiveView),
    ClearHistory,
    DismissError,
    Close,
}

/// Notifications from the controller back to the presentation layer.
#[derive(Debug, Clone)]
pub enum AppEvent {
    LoadingChanged(bool),
    AudioLoadingChanged(bool),
    EntryLoaded {
        entry: DictionaryEntry,
        /// Whether a back step is available after this load.
        can_go_back: bool,
    },
    SearchFailed(String),
    Suggestions(Vec<String>),
    HistoryChanged(Vec<SearchHistoryItem>),
    ViewChanged(ActiveView),
    ErrorDismissed,
    ScrollToTop,
}
