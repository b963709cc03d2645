use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use lexiflow_types::AppEvent;
use tokio::time::timeout;

use crate::events::suggest::SuggestionDebouncer;
use crate::tests::support::FakeProvider;

fn debouncer(
    provider: Arc<FakeProvider>,
    debounce_ms: u64,
) -> (SuggestionDebouncer, kanal::AsyncReceiver<AppEvent>) {
    let (tx, rx) = kanal::bounded_async(16);
    (
        SuggestionDebouncer::new(provider, tx, Duration::from_millis(debounce_ms)),
        rx,
    )
}

async fn next_suggestions(rx: &kanal::AsyncReceiver<AppEvent>) -> Vec<String> {
    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for suggestions")
        .expect("channel closed");
    match event {
        AppEvent::Suggestions(suggestions) => suggestions,
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn short_queries_yield_empty_without_fetching() {
    let provider = Arc::new(FakeProvider {
        suggestions: vec!["run".to_string()],
        ..FakeProvider::new()
    });
    let (mut debouncer, rx) = debouncer(provider.clone(), 5);

    debouncer.query_changed("r".to_string());
    assert!(next_suggestions(&rx).await.is_empty());
    assert_eq!(provider.suggestion_fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn debounced_fetch_fires_after_the_idle_window() {
    let provider = Arc::new(FakeProvider {
        suggestions: vec!["run".to_string(), "rung".to_string()],
        ..FakeProvider::new()
    });
    let (mut debouncer, rx) = debouncer(provider.clone(), 5);

    debouncer.query_changed("ru".to_string());
    assert_eq!(next_suggestions(&rx).await, ["run", "rung"]);
    assert_eq!(provider.suggestion_fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rapid_keystrokes_supersede_pending_fetches() {
    let provider = Arc::new(FakeProvider {
        suggestions: vec!["running".to_string()],
        ..FakeProvider::new()
    });
    // A long idle window so earlier keystrokes are still pending when
    // superseded.
    let (mut debouncer, rx) = debouncer(provider.clone(), 200);

    debouncer.query_changed("ru".to_string());
    debouncer.query_changed("run".to_string());
    debouncer.query_changed("runn".to_string());

    assert_eq!(next_suggestions(&rx).await, ["running"]);
    assert_eq!(provider.suggestion_fetches.load(Ordering::SeqCst), 1);

    // Nothing else arrives for the aborted keystrokes.
    assert!(
        timeout(Duration::from_millis(300), rx.recv()).await.is_err(),
        "aborted fetch still delivered"
    );
}

#[tokio::test]
async fn cancel_aborts_the_pending_fetch() {
    let provider = Arc::new(FakeProvider::new());
    let (mut debouncer, rx) = debouncer(provider.clone(), 100);

    debouncer.query_changed("ru".to_string());
    debouncer.cancel();

    assert!(timeout(Duration::from_millis(300), rx.recv()).await.is_err());
    assert_eq!(provider.suggestion_fetches.load(Ordering::SeqCst), 0);
}
