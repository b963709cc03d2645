use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexiflow_config::Config;
use lexiflow_types::{ActiveView, AppEvent, DictionaryEntry, SearchHistoryItem, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::render::{filtered_history, render_entry};
use crate::text::clickable_word;

/// What the terminal front-end remembers between events: enough to
/// resolve numbered picks and clickable-word lookups.
struct UiView {
    entry: Option<DictionaryEntry>,
    suggestions: Vec<String>,
    history: Vec<SearchHistoryItem>,
    history_picks: Vec<String>,
    history_filter: String,
    can_go_back: bool,
    view: ActiveView,
    recent_words: usize,
}

impl UiView {
    fn new(recent_words: usize) -> Self {
        Self {
            entry: None,
            suggestions: Vec::new(),
            history: Vec::new(),
            history_picks: Vec::new(),
            history_filter: String::new(),
            can_go_back: false,
            view: ActiveView::Search,
            recent_words,
        }
    }

    /// The quick-list shown while the search view has nothing to display:
    /// the most recent lookups, capped by `recent_words`.
    fn recent_line(&self) -> Option<String> {
        if self.entry.is_some() || self.history.is_empty() || self.recent_words == 0 {
            return None;
        }
        let words: Vec<&str> = self
            .history
            .iter()
            .take(self.recent_words)
            .map(|item| item.word.as_str())
            .collect();
        Some(format!("recent: {}", words.join(", ")))
    }

    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadingChanged(true) => println!("looking up..."),
            AppEvent::LoadingChanged(false) => {}
            AppEvent::AudioLoadingChanged(true) => println!("fetching audio..."),
            AppEvent::AudioLoadingChanged(false) => {}
            AppEvent::EntryLoaded { entry, can_go_back } => {
                println!("{}", render_entry(&entry));
                if can_go_back {
                    println!("(:b to go back)");
                }
                self.entry = Some(entry);
                self.can_go_back = can_go_back;
            }
            AppEvent::SearchFailed(message) => println!("{message}"),
            AppEvent::Suggestions(suggestions) => {
                for (i, s) in suggestions.iter().enumerate() {
                    println!("  :{}  {}", i + 1, s);
                }
                self.suggestions = suggestions;
            }
            AppEvent::HistoryChanged(history) => {
                self.history = history;
                if let Some(line) = self.recent_line() {
                    println!("{line}");
                }
            }
            AppEvent::ViewChanged(ActiveView::History) => {
                self.view = ActiveView::History;
                let filtered = filtered_history(&self.history, &self.history_filter);
                self.history_picks = filtered.iter().map(|item| item.word.clone()).collect();
                println!("{}", crate::render::render_history(&filtered));
            }
            AppEvent::ViewChanged(ActiveView::Search) => {
                self.view = ActiveView::Search;
            }
            AppEvent::ErrorDismissed => {}
            AppEvent::ScrollToTop => {}
        }
    }

    /// Map one input line to intents. Unrecognized commands map to none.
    fn parse(&mut self, line: &str) -> Vec<UiEvent> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        if let Some(command) = line.strip_prefix(':') {
            return self.parse_command(command);
        }

        vec![UiEvent::Search {
            word: line.to_string(),
            is_back_action: false,
        }]
    }

    fn parse_command(&mut self, command: &str) -> Vec<UiEvent> {
        let (name, rest) = match command.split_once(' ') {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name {
            "q" => vec![UiEvent::Close],
            "b" => vec![UiEvent::GoBack],
            "p" => vec![UiEvent::PlayAudio],
            "s" => vec![UiEvent::SetView(ActiveView::Search)],
            "h" => {
                self.history_filter = rest.to_string();
                vec![UiEvent::SetView(ActiveView::History)]
            }
            "t" => vec![UiEvent::QueryChanged(rest.to_string())],
            "w" => match clickable_word(rest) {
                Some(word) => vec![UiEvent::Search {
                    word,
                    is_back_action: false,
                }],
                None => Vec::new(),
            },
            "clear" => vec![UiEvent::ClearHistory],
            "x" => vec![UiEvent::DismissError],
            _ => match name.parse::<usize>() {
                Ok(n) => self.pick(n),
                Err(_) => {
                    println!("unknown command :{name}");
                    Vec::new()
                }
            },
        }
    }

    /// Numbered picks resolve against whatever list is on screen: the
    /// suggestion list in the search view, the rendered (filtered)
    /// history in the history view.
    fn pick(&self, n: usize) -> Vec<UiEvent> {
        let picks = match self.view {
            ActiveView::Search => &self.suggestions,
            ActiveView::History => &self.history_picks,
        };

        if n >= 1 && n <= picks.len() {
            vec![UiEvent::Search {
                word: picks[n - 1].clone(),
                is_back_action: false,
            }]
        } else {
            Vec::new()
        }
    }
}

/// Line-oriented terminal front-end: words are searched as typed, colon
/// commands cover the rest (:t typeahead, :1-:5 pick a suggestion or
/// history item, :b back, :p pronounce, :h history, :clear, :q).
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<UiEvent>,
    config: Arc<RwLock<Config>>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let recent_words = config.read().await.ui.recent_words;
    let mut view = UiView::new(recent_words);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("lexiflow: type a word to look it up (:q to quit)");

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                let _ = ui_to_app_tx.send(UiEvent::Close).await;
                return Ok(());
            }
            event = app_to_ui_rx.recv() => {
                view.apply(event?);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    let _ = ui_to_app_tx.send(UiEvent::Close).await;
                    return Ok(());
                };
                for intent in view.parse(&line) {
                    let closing = matches!(intent, UiEvent::Close);
                    ui_to_app_tx.send(intent).await?;
                    if closing {
                        return Ok(());
                    }
                }
            }
        }
    }
}
