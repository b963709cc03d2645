use serde_json::{Value, json};

/// Response schema for the full dictionary entry. Mirrors the shape of
/// [`lexiflow_types::DictionaryEntry`]; the model is instructed to emit
/// JSON conforming to it.
pub fn dictionary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "word": { "type": "STRING" },
            "ipa": { "type": "STRING" },
            "frequency": {
                "type": "OBJECT",
                "properties": {
                    "spoken": { "type": "STRING", "description": "S1, S2, or S3 based on LDOCE frequency" },
                    "written": { "type": "STRING", "description": "W1, W2, or W3 based on LDOCE frequency" }
                }
            },
            "definitions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "pos": { "type": "STRING", "description": "e.g., verb, noun, adjective" },
                        "pattern": { "type": "STRING", "description": "Grammar pattern, e.g., '[C]', '[U]', '[T]', '[I]'" },
                        "meaning": { "type": "STRING", "description": "The core definition in simple Longman 2000-word vocabulary style" },
                        "examples": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Authentic examples" },
                        "collocations": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Typical word combinations" }
                    },
                    "required": ["pos", "meaning", "examples"]
                }
            },
            "phrasal_verbs": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "phrase": { "type": "STRING" },
                        "meaning": { "type": "STRING" },
                        "examples": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["phrase", "meaning", "examples"]
                }
            },
            "derivatives": { "type": "ARRAY", "items": { "type": "STRING" } },
            "synonyms": { "type": "ARRAY", "items": { "type": "STRING" } },
            "antonyms": { "type": "ARRAY", "items": { "type": "STRING" } },
            "origin": { "type": "STRING" },
            "usage_note": { "type": "STRING" },
            "translation": {
                "type": "OBJECT",
                "properties": {
                    "sourceText": { "type": "STRING" },
                    "translatedText": { "type": "STRING" },
                    "isSentence": { "type": "BOOLEAN", "description": "True if the input was a full sentence rather than a single word" }
                }
            }
        },
        "required": ["word", "ipa", "definitions", "synonyms", "antonyms"]
    })
}

/// Response schema for the suggestion list: a plain array of strings.
pub fn suggestion_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}
