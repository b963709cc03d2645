use lexiflow_types::{ActiveView, AppEvent};

use crate::events::LookupContext;
use crate::navigator::Navigator;

pub async fn handle_search(
    ctx: &LookupContext,
    navigator: &mut Navigator,
    word: &str,
    is_back_action: bool,
) -> anyhow::Result<()> {
    navigator.begin_search();
    let _ = ctx.app_to_ui_tx.send(AppEvent::LoadingChanged(true)).await;
    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::ViewChanged(ActiveView::Search))
        .await;

    match ctx.provider.fetch_entry(word).await {
        Ok(entry) => {
            let now_ms = chrono::Utc::now().timestamp_millis();
            let history = navigator.finish_search(entry.clone(), is_back_action, now_ms);

            // Best-effort: an unavailable store degrades to a
            // session-only history, never a failed search.
            if let Err(e) = ctx.store.save(&history) {
                tracing::warn!("failed to persist history: {e}");
            }

            let _ = ctx
                .app_to_ui_tx
                .send(AppEvent::EntryLoaded {
                    entry,
                    can_go_back: navigator.can_go_back(),
                })
                .await;
            let _ = ctx.app_to_ui_tx.send(AppEvent::HistoryChanged(history)).await;
            let _ = ctx.app_to_ui_tx.send(AppEvent::ScrollToTop).await;
        }
        Err(e) => {
            tracing::warn!("lookup for {word:?} failed: {e}");
            navigator.fail_search();
            let _ = ctx
                .app_to_ui_tx
                .send(AppEvent::SearchFailed(
                    navigator.error().unwrap_or_default().to_string(),
                ))
                .await;
        }
    }

    let _ = ctx.app_to_ui_tx.send(AppEvent::LoadingChanged(false)).await;
    Ok(())
}

/// Back-navigation replays the cached entry; no fetch, no history touch.
pub async fn handle_go_back(
    ctx: &LookupContext,
    navigator: &mut Navigator,
) -> anyhow::Result<()> {
    let Some(entry) = navigator.go_back().cloned() else {
        return Ok(());
    };

    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::EntryLoaded {
            entry,
            can_go_back: navigator.can_go_back(),
        })
        .await;
    let _ = ctx.app_to_ui_tx.send(AppEvent::ScrollToTop).await;
    Ok(())
}
