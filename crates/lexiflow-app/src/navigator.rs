use lexiflow_types::{ActiveView, DictionaryEntry, SearchHistoryItem};

/// Fixed user-facing message for any failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "Word not found. Check spelling or try another.";

/// Session navigation state: the entry being shown, the back-stack of
/// previously shown entries, the persisted history, and the loading and
/// error flags the presentation layer renders.
///
/// All mutation happens on the event loop, one intent at a time.
pub struct Navigator {
    current_entry: Option<DictionaryEntry>,
    back_stack: Vec<DictionaryEntry>,
    is_loading: bool,
    error: Option<String>,
    history: Vec<SearchHistoryItem>,
    history_limit: usize,
    is_audio_loading: bool,
    active_view: ActiveView,
}

impl Navigator {
    pub fn new(history_limit: usize) -> Self {
        Self {
            current_entry: None,
            back_stack: Vec::new(),
            is_loading: false,
            error: None,
            history: Vec::new(),
            history_limit,
            is_audio_loading: false,
            active_view: ActiveView::Search,
        }
    }

    /// Adopt history loaded from the store, enforcing the cap.
    pub fn restore_history(&mut self, items: Vec<SearchHistoryItem>) {
        self.history = items;
        self.history.truncate(self.history_limit);
    }

    /// A lookup is starting: loading on, stale error cleared, and the
    /// search view takes over.
    pub fn begin_search(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.active_view = ActiveView::Search;
    }

    /// A lookup succeeded. Forward searches push the displaced entry onto
    /// the back-stack (or reset the stack when there was nothing shown);
    /// back-action searches leave the stack alone. History is deduped
    /// case-insensitively, newest first, capped. Returns the updated
    /// history for persistence.
    pub fn finish_search(
        &mut self,
        entry: DictionaryEntry,
        is_back_action: bool,
        now_ms: i64,
    ) -> Vec<SearchHistoryItem> {
        if !is_back_action {
            match self.current_entry.take() {
                Some(previous) => self.back_stack.push(previous),
                None => self.back_stack.clear(),
            }
        }

        let word = entry.word.clone();
        let needle = word.to_lowercase();
        self.history.retain(|item| item.word.to_lowercase() != needle);
        self.history.insert(
            0,
            SearchHistoryItem {
                word,
                timestamp: now_ms,
            },
        );
        self.history.truncate(self.history_limit);

        self.current_entry = Some(entry);
        self.is_loading = false;
        self.history.clone()
    }

    /// A lookup failed: fixed message, loading cleared, everything else
    /// untouched.
    pub fn fail_search(&mut self) {
        self.error = Some(NOT_FOUND_MESSAGE.to_string());
        self.is_loading = false;
    }

    /// Pop the back-stack into the current entry. `None` when the stack
    /// is empty, in which case nothing changes. Never re-fetches and
    /// never touches history.
    pub fn go_back(&mut self) -> Option<&DictionaryEntry> {
        let entry = self.back_stack.pop()?;
        self.current_entry = Some(entry);
        self.current_entry.as_ref()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn set_audio_loading(&mut self, loading: bool) {
        self.is_audio_loading = loading;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn back_depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn current_entry(&self) -> Option<&DictionaryEntry> {
        self.current_entry.as_ref()
    }

    pub fn history(&self) -> &[SearchHistoryItem] {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_audio_loading(&self) -> bool {
        self.is_audio_loading
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }
}
