use lexiflow_types::{DictionaryEntry, SearchHistoryItem};

/// Plain-text rendering of an entry. Absent optional fields produce no
/// output at all.
pub fn render_entry(entry: &DictionaryEntry) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}  /{}/\n", entry.word, entry.ipa));

    if let Some(freq) = &entry.frequency {
        let bands: Vec<&str> = [freq.spoken.as_deref(), freq.written.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !bands.is_empty() {
            out.push_str(&format!("frequency: {}\n", bands.join(" ")));
        }
    }

    if let Some(translation) = &entry.translation {
        out.push_str(&format!(
            "translation: {} -> {}\n",
            translation.source_text, translation.translated_text
        ));
    }

    for (pos, defs) in entry.grouped_definitions() {
        out.push_str(&format!("\n[{pos}]\n"));
        for (i, def) in defs.iter().enumerate() {
            match &def.pattern {
                Some(pattern) => {
                    out.push_str(&format!("  {}. {} {}\n", i + 1, pattern, def.meaning))
                }
                None => out.push_str(&format!("  {}. {}\n", i + 1, def.meaning)),
            }
            for example in &def.examples {
                out.push_str(&format!("     - {example}\n"));
            }
            if let Some(collocations) = &def.collocations {
                if !collocations.is_empty() {
                    out.push_str(&format!("     ~ {}\n", collocations.join(", ")));
                }
            }
        }
    }

    if let Some(phrasal_verbs) = &entry.phrasal_verbs {
        if !phrasal_verbs.is_empty() {
            out.push_str("\nphrasal verbs:\n");
            for pv in phrasal_verbs {
                out.push_str(&format!("  {}: {}\n", pv.phrase, pv.meaning));
                for example in &pv.examples {
                    out.push_str(&format!("     - {example}\n"));
                }
            }
        }
    }

    if !entry.synonyms.is_empty() {
        out.push_str(&format!("\nsynonyms: {}\n", entry.synonyms.join(", ")));
    }
    if !entry.antonyms.is_empty() {
        out.push_str(&format!("antonyms: {}\n", entry.antonyms.join(", ")));
    }
    if let Some(derivatives) = &entry.derivatives {
        if !derivatives.is_empty() {
            out.push_str(&format!("derivatives: {}\n", derivatives.join(", ")));
        }
    }
    if let Some(origin) = &entry.origin {
        out.push_str(&format!("\norigin: {origin}\n"));
    }
    if let Some(note) = &entry.usage_note {
        out.push_str(&format!("usage: {note}\n"));
    }

    out
}

/// History items matching a case-insensitive substring filter, newest
/// first. An empty filter matches everything.
pub fn filtered_history<'a>(
    items: &'a [SearchHistoryItem],
    filter: &str,
) -> Vec<&'a SearchHistoryItem> {
    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.word.to_lowercase().contains(&needle))
        .collect()
}

/// History view: numbered so entries can be picked for re-lookup.
pub fn render_history(items: &[&SearchHistoryItem]) -> String {
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        let when = chrono::DateTime::from_timestamp_millis(item.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        out.push_str(&format!("  :{}  {}  {}\n", i + 1, when, item.word));
    }

    if out.is_empty() {
        out.push_str("  (no history)\n");
    }
    out
}
