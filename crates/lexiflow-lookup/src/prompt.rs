use unicode_normalization::UnicodeNormalization;

use crate::MAX_SUGGESTIONS;

/// True when the text contains CJK unified ideographs, which routes the
/// lookup to the translation-oriented prompt.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

/// NFKC-normalize and trim a raw query before it reaches a prompt.
pub fn normalize_query(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    normalized.trim().to_string()
}

pub fn entry_prompt(word: &str) -> String {
    if contains_cjk(word) {
        format!(
            "The user provided a Chinese input: \"{word}\". \
             1. Translate it to the most appropriate English word or phrase. \
             2. If it's a single word, provide a full LDOCE-style dictionary entry for that English translation. \
             3. If it's a sentence, provide the translation and minimal dictionary info. \
             Include the original Chinese in translation.sourceText and the English in translation.translatedText."
        )
    } else {
        format!(
            "Act as a master lexicographer for the Longman Dictionary of Contemporary English (LDOCE). \
             Provide a detailed entry for \"{word}\". \
             Include grammar tags like [C], [U], [T], [I]. Use Longman 2000-word vocabulary for definitions. \
             Identify if this is a high-frequency word (S1-S3, W1-W3)."
        )
    }
}

pub fn suggestion_prompt(query: &str) -> String {
    format!(
        "Generate a list of {MAX_SUGGESTIONS} common English words starting with or similar to \"{query}\". \
         Return only a JSON array of strings."
    )
}

pub fn audio_prompt(word: &str) -> String {
    format!("Pronounce clearly in a standard American English accent: {word}")
}
