use std::sync::Arc;

use tokio::sync::oneshot;
use verdura_catalog::{CatalogClient, CatalogError, DisplayItem, Item};

/// Where the screen's single fetch stands.
///
/// `Ready` and `Failed` are terminal: the screen fetches once, on start,
/// and never again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

pub struct CatalogScreen {
    pub phase: Phase,
    pub should_quit: bool,
    /// Current catalog snapshot; empty until the first `Ready`.
    pub items: Vec<DisplayItem>,
    pub error: Option<String>,
    pub search: String,
    pub selected: usize,
    client: Arc<CatalogClient>,
    fetch_rx: Option<oneshot::Receiver<Result<Vec<Item>, CatalogError>>>,
}

impl CatalogScreen {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            phase: Phase::Idle,
            should_quit: false,
            items: Vec::new(),
            error: None,
            search: String::new(),
            selected: 0,
            client: Arc::new(client),
            fetch_rx: None,
        }
    }

    /// Kicks off the screen's one catalog fetch.
    ///
    /// Only an `Idle` screen starts a fetch; later calls are ignored, so
    /// the lifecycle stays single-shot.
    pub fn start_fetch(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);

        tokio::spawn(async move {
            let result = client.fetch_catalog().await;
            // The receiver is gone when the screen was torn down or the
            // fetch cancelled; the outcome is void then.
            let _ = tx.send(result);
        });

        self.fetch_rx = Some(rx);
        self.phase = Phase::Loading;
        self.error = None;
    }

    /// Applies the fetch outcome once it has settled.
    pub fn poll_fetch(&mut self) {
        if let Some(ref mut rx) = self.fetch_rx {
            match rx.try_recv() {
                Ok(Ok(items)) => {
                    // Whole-catalog snapshot swap; the presenter never
                    // observes a partially updated list.
                    self.items = items.into_iter().map(DisplayItem::new).collect();
                    self.fetch_rx = None;
                    self.phase = Phase::Ready;
                }
                Ok(Err(err)) => {
                    self.error = Some(format!("Could not load the catalog: {}", err));
                    self.fetch_rx = None;
                    self.phase = Phase::Failed;
                }
                Err(oneshot::error::TryRecvError::Empty) => {
                    // Still waiting
                }
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.error = Some("Could not load the catalog: request dropped".to_string());
                    self.fetch_rx = None;
                    self.phase = Phase::Failed;
                }
            }
        }
    }

    /// Voids the in-flight fetch; a late outcome is discarded.
    pub fn cancel_fetch(&mut self) {
        if self.phase == Phase::Loading {
            self.fetch_rx = None;
            self.error = Some("Cancelled".to_string());
            self.phase = Phase::Failed;
        }
    }

    /// Items whose name contains the search needle, case-insensitively.
    pub fn visible_items(&self) -> Vec<&DisplayItem> {
        if self.search.is_empty() {
            return self.items.iter().collect();
        }

        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|i| i.item.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_down(&mut self) {
        let max = self.visible_items().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn search_char(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search.pop();
        self.selected = 0;
    }
}
