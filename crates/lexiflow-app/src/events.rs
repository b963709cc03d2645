use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexiflow_audio::Pronouncer;
use lexiflow_lookup::LookupProvider;
use lexiflow_store::HistoryStore;
use lexiflow_types::{AppEvent, UiEvent};

use crate::navigator::Navigator;
use crate::state::AppState;

pub mod history;
pub mod pronounce;
pub mod search;
pub mod suggest;

use history::handle_clear_history;
use pronounce::handle_pronounce;
use search::{handle_go_back, handle_search};
use suggest::SuggestionDebouncer;

/// Bundles the shared dependencies every intent handler needs, reducing
/// parameter passing through the event loop.
#[derive(Clone)]
pub struct LookupContext {
    pub state: Arc<AppState>,
    pub provider: Arc<dyn LookupProvider>,
    pub store: Arc<dyn HistoryStore>,
    pub pronouncer: Arc<Pronouncer>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

impl LookupContext {
    pub fn new(
        state: Arc<AppState>,
        provider: Arc<dyn LookupProvider>,
        store: Arc<dyn HistoryStore>,
        pronouncer: Arc<Pronouncer>,
        app_to_ui_tx: AsyncSender<AppEvent>,
    ) -> Self {
        Self {
            state,
            provider,
            store,
            pronouncer,
            app_to_ui_tx,
        }
    }
}

/// App's main loop: owns the navigator and applies one intent at a time,
/// so no two lookups ever mutate state concurrently.
pub async fn event_loop(
    ctx: LookupContext,
    ui_to_app_rx: AsyncReceiver<UiEvent>,
) -> anyhow::Result<()> {
    let (history_limit, debounce) = {
        let config = ctx.state.config.read().await;
        (
            config.history.limit,
            Duration::from_millis(config.ui.suggestion_debounce_ms),
        )
    };

    let mut navigator = Navigator::new(history_limit);
    navigator.restore_history(ctx.store.load());
    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::HistoryChanged(navigator.history().to_vec()))
        .await;

    let mut debouncer =
        SuggestionDebouncer::new(ctx.provider.clone(), ctx.app_to_ui_tx.clone(), debounce);

    tracing::info!("event loop started, waiting for intents");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("intent received: {:?}", std::mem::discriminant(&event));

        match event {
            UiEvent::Search {
                word,
                is_back_action,
            } => {
                handle_search(&ctx, &mut navigator, &word, is_back_action).await?;
            }
            UiEvent::QueryChanged(query) => {
                debouncer.query_changed(query);
            }
            UiEvent::GoBack => {
                handle_go_back(&ctx, &mut navigator).await?;
            }
            UiEvent::PlayAudio => {
                handle_pronounce(&ctx, &mut navigator).await?;
            }
            UiEvent::SetView(view) => {
                navigator.set_active_view(view);
                let _ = ctx.app_to_ui_tx.send(AppEvent::ViewChanged(view)).await;
            }
            UiEvent::ClearHistory => {
                handle_clear_history(&ctx, &mut navigator).await?;
            }
            UiEvent::DismissError => {
                navigator.dismiss_error();
                let _ = ctx.app_to_ui_tx.send(AppEvent::ErrorDismissed).await;
            }
            UiEvent::Close => {
                debouncer.cancel();
                tracing::info!("close requested, stopping event loop");
                return Ok(());
            }
        }
    }
}
