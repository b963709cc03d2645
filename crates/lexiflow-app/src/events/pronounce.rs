use lexiflow_types::AppEvent;

use crate::events::LookupContext;
use crate::navigator::Navigator;

/// Pronounce the entry currently shown. No-op without one. Failures stay
/// inside the pronouncer; only the audio-loading flag is surfaced.
pub async fn handle_pronounce(
    ctx: &LookupContext,
    navigator: &mut Navigator,
) -> anyhow::Result<()> {
    let Some(word) = navigator.current_entry().map(|e| e.word.clone()) else {
        return Ok(());
    };

    navigator.set_audio_loading(true);
    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::AudioLoadingChanged(true))
        .await;

    ctx.pronouncer.pronounce(&word).await;

    navigator.set_audio_loading(false);
    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::AudioLoadingChanged(false))
        .await;
    Ok(())
}
