use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use lexiflow_lookup::{LookupProvider, MIN_QUERY_CHARS};
use lexiflow_types::AppEvent;
use tokio::task::JoinHandle;

/// Debounced typeahead: each keystroke supersedes the previous pending
/// fetch, and only a query that survives the idle window reaches the
/// network. Fetch errors degrade to an empty suggestion list.
pub struct SuggestionDebouncer {
    provider: Arc<dyn LookupProvider>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SuggestionDebouncer {
    pub fn new(
        provider: Arc<dyn LookupProvider>,
        app_to_ui_tx: AsyncSender<AppEvent>,
        debounce: Duration,
    ) -> Self {
        Self {
            provider,
            app_to_ui_tx,
            debounce,
            pending: None,
        }
    }

    pub fn query_changed(&mut self, query: String) {
        self.cancel();

        let tx = self.app_to_ui_tx.clone();

        if query.trim().chars().count() < MIN_QUERY_CHARS {
            self.pending = Some(tokio::spawn(async move {
                let _ = tx.send(AppEvent::Suggestions(Vec::new())).await;
            }));
            return;
        }

        let provider = self.provider.clone();
        let debounce = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let suggestions = match provider.fetch_suggestions(&query).await {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    tracing::debug!("suggestion fetch for {query:?} failed: {e}");
                    Vec::new()
                }
            };
            let _ = tx.send(AppEvent::Suggestions(suggestions)).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SuggestionDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
