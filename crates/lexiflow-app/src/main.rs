use std::sync::Arc;

use lexiflow_audio::{Pronouncer, RodioSink, SystemSpeech};
use lexiflow_config::Config;
use lexiflow_lookup::{GeminiLookup, LookupProvider};
use lexiflow_store::{HistoryStore, JsonFileStore};
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod navigator;
mod render;
mod state;
mod text;
mod ui;

#[cfg(test)]
mod tests;

use controller::AppController;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the terminal front-end.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();

    let config = Config::new();
    if config.lookup.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; lookups will fail until it is");
    }

    let provider: Arc<dyn LookupProvider> = Arc::new(GeminiLookup::new(config.lookup.clone()));
    let store: Arc<dyn HistoryStore> = Arc::new(match &config.history.path {
        Some(path) => JsonFileStore::new(path.clone()),
        None => JsonFileStore::default(),
    });
    let pronouncer = Arc::new(Pronouncer::new(
        provider.clone(),
        Arc::new(RodioSink::new()),
        Arc::new(SystemSpeech::new()),
        config.audio.sample_rate,
        config.audio.speech_locale.clone(),
    ));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(provider, store, pronouncer);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished, shutting down"),
                Some(Ok(Err(e))) => tracing::error!("task exited with error: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}
