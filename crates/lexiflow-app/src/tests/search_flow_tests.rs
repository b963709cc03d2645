use std::sync::Arc;
use std::time::Duration;

use lexiflow_store::HistoryStore;
use lexiflow_types::AppEvent;
use tokio::time::timeout;

use crate::events::history::handle_clear_history;
use crate::events::pronounce::handle_pronounce;
use crate::events::search::{handle_go_back, handle_search};
use crate::navigator::{NOT_FOUND_MESSAGE, Navigator};
use crate::tests::support::{FakeProvider, harness};

async fn drain(rx: &kanal::AsyncReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(Ok(event)) = timeout(Duration::from_millis(50), rx.recv()).await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn successful_search_updates_entry_history_and_store() {
    let h = harness(Arc::new(FakeProvider::new()));
    let mut navigator = Navigator::new(100);

    handle_search(&h.ctx, &mut navigator, "run", false)
        .await
        .unwrap();

    let events = drain(&h.app_to_ui_rx).await;
    assert!(events.iter().any(|e| matches!(e, AppEvent::LoadingChanged(true))));
    assert!(events.iter().any(
        |e| matches!(e, AppEvent::EntryLoaded { entry, can_go_back: false } if entry.word == "run")
    ));
    assert!(events.iter().any(
        |e| matches!(e, AppEvent::HistoryChanged(items) if items.len() == 1 && items[0].word == "run")
    ));
    assert!(events.iter().any(|e| matches!(e, AppEvent::ScrollToTop)));
    assert!(matches!(events.last(), Some(AppEvent::LoadingChanged(false))));

    // The updated history was persisted.
    assert_eq!(h.store.load()[0].word, "run");
}

#[tokio::test]
async fn failed_search_surfaces_the_fixed_message() {
    let h = harness(Arc::new(FakeProvider::failing()));
    let mut navigator = Navigator::new(100);

    handle_search(&h.ctx, &mut navigator, "ubiquitous", false)
        .await
        .unwrap();

    let events = drain(&h.app_to_ui_rx).await;
    assert!(events
        .iter()
        .any(|e| matches!(e, AppEvent::SearchFailed(msg) if msg == NOT_FOUND_MESSAGE)));
    assert!(matches!(events.last(), Some(AppEvent::LoadingChanged(false))));
    assert!(navigator.current_entry().is_none());
    assert!(h.store.load().is_empty());
}

#[tokio::test]
async fn go_back_replays_the_cached_entry_without_fetching() {
    let provider = Arc::new(FakeProvider::new());
    let h = harness(provider);
    let mut navigator = Navigator::new(100);

    handle_search(&h.ctx, &mut navigator, "run", false)
        .await
        .unwrap();
    handle_search(&h.ctx, &mut navigator, "jog", false)
        .await
        .unwrap();
    drain(&h.app_to_ui_rx).await;

    handle_go_back(&h.ctx, &mut navigator).await.unwrap();
    let events = drain(&h.app_to_ui_rx).await;
    assert!(events.iter().any(
        |e| matches!(e, AppEvent::EntryLoaded { entry, can_go_back: false } if entry.word == "run")
    ));
    // History is untouched by back navigation.
    assert!(!events.iter().any(|e| matches!(e, AppEvent::HistoryChanged(_))));
    assert_eq!(h.store.load().len(), 2);
}

#[tokio::test]
async fn go_back_with_empty_stack_emits_nothing() {
    let h = harness(Arc::new(FakeProvider::new()));
    let mut navigator = Navigator::new(100);

    handle_go_back(&h.ctx, &mut navigator).await.unwrap();
    assert!(drain(&h.app_to_ui_rx).await.is_empty());
}

#[tokio::test]
async fn pronounce_without_an_entry_is_a_no_op() {
    let h = harness(Arc::new(FakeProvider::new()));
    let mut navigator = Navigator::new(100);

    handle_pronounce(&h.ctx, &mut navigator).await.unwrap();
    assert!(drain(&h.app_to_ui_rx).await.is_empty());
}

#[tokio::test]
async fn pronounce_toggles_the_audio_loading_flag() {
    let h = harness(Arc::new(FakeProvider::new()));
    let mut navigator = Navigator::new(100);

    handle_search(&h.ctx, &mut navigator, "run", false)
        .await
        .unwrap();
    drain(&h.app_to_ui_rx).await;

    handle_pronounce(&h.ctx, &mut navigator).await.unwrap();
    let events = drain(&h.app_to_ui_rx).await;
    assert!(events
        .iter()
        .any(|e| matches!(e, AppEvent::AudioLoadingChanged(true))));
    assert!(matches!(
        events.last(),
        Some(AppEvent::AudioLoadingChanged(false))
    ));
    assert!(!navigator.is_audio_loading());
}

#[tokio::test]
async fn clear_history_empties_memory_and_store() {
    let h = harness(Arc::new(FakeProvider::new()));
    let mut navigator = Navigator::new(100);

    handle_search(&h.ctx, &mut navigator, "run", false)
        .await
        .unwrap();
    drain(&h.app_to_ui_rx).await;
    assert!(h.store.has_blob());

    handle_clear_history(&h.ctx, &mut navigator).await.unwrap();
    let events = drain(&h.app_to_ui_rx).await;
    assert!(events
        .iter()
        .any(|e| matches!(e, AppEvent::HistoryChanged(items) if items.is_empty())));
    assert!(navigator.history().is_empty());
    assert!(!h.store.has_blob());
    assert!(h.store.load().is_empty());
}
