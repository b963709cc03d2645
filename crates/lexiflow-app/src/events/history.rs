use lexiflow_types::AppEvent;

use crate::events::LookupContext;
use crate::navigator::Navigator;

pub async fn handle_clear_history(
    ctx: &LookupContext,
    navigator: &mut Navigator,
) -> anyhow::Result<()> {
    navigator.clear_history();

    if let Err(e) = ctx.store.clear() {
        tracing::warn!("failed to remove persisted history: {e}");
    }

    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::HistoryChanged(Vec::new()))
        .await;
    Ok(())
}
