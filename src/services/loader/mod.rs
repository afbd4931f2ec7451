//! Calendar loading.
//!
//! Each navigation starts a load: the grid shows a loading placeholder, a
//! worker thread fetches the month and lays it out, and the finished grid is
//! handed back over a channel. Every load carries a sequence number; only the
//! most recently started load may replace the grid, so a slow response for a
//! month the user has already navigated away from is dropped.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::models::view_state::ViewState;
use crate::services::fetcher::{fetch_or_empty, EventSource, LOAD_ERROR_MESSAGE};
use crate::services::month_grid::{build_month_grid, MonthGrid};

/// Hands out load sequence numbers and remembers the newest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// What the grid area shows
#[derive(Debug, Clone, PartialEq)]
pub enum GridPanel {
    Loading { view: ViewState },
    Ready {
        grid: MonthGrid,
        /// Shown above the grid when the fetch failed
        error: Option<String>,
    },
}

impl GridPanel {
    pub fn view(&self) -> ViewState {
        match self {
            GridPanel::Loading { view } => *view,
            GridPanel::Ready { grid, .. } => grid.view,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GridPanel::Loading { .. })
    }
}

#[derive(Debug)]
pub struct LoadResult {
    pub seq: u64,
    pub view: ViewState,
    pub grid: MonthGrid,
    pub error: Option<String>,
}

type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub struct CalendarLoader {
    source: Arc<dyn EventSource>,
    tracker: LoadTracker,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
    on_complete: Option<RepaintHook>,
    panel: GridPanel,
}

impl CalendarLoader {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tracker: LoadTracker::default(),
            tx,
            rx,
            on_complete: None,
            panel: GridPanel::Loading {
                view: ViewState::today(),
            },
        }
    }

    /// Called from the worker thread after each load finishes
    pub fn with_completion_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(hook));
        self
    }

    pub fn panel(&self) -> &GridPanel {
        &self.panel
    }

    /// Start loading `view`. Returns the sequence number of the new load.
    pub fn load(&mut self, view: ViewState) -> u64 {
        let seq = self.tracker.begin();
        self.panel = GridPanel::Loading { view };

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let hook = self.on_complete.clone();

        let spawned = thread::Builder::new()
            .name(format!("load-{}-{:02}", view.year(), view.month_one_based()))
            .spawn(move || {
                let outcome = fetch_or_empty(source.as_ref(), view);
                let grid = build_month_grid(view, &outcome.events);
                let result = LoadResult {
                    seq,
                    view,
                    grid,
                    error: outcome.error,
                };
                if tx.send(result).is_err() {
                    log::debug!("Loader dropped before load {} finished", seq);
                }
                if let Some(hook) = hook {
                    hook();
                }
            });

        if let Err(err) = spawned {
            log::error!("Failed to start load for {}: {}", view.title(), err);
            self.panel = GridPanel::Ready {
                grid: build_month_grid(view, &[]),
                error: Some(LOAD_ERROR_MESSAGE.to_string()),
            };
        }

        seq
    }

    /// Apply any finished loads. Returns true when the panel changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            changed |= self.accept(result);
        }
        changed
    }

    /// Block until the newest load lands or `timeout` passes
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.panel.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(result) => {
                    self.accept(result);
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        !self.panel.is_loading()
    }

    fn accept(&mut self, result: LoadResult) -> bool {
        if !self.tracker.is_current(result.seq) {
            log::debug!(
                "Discarding stale load {} for {} (latest is {})",
                result.seq,
                result.view.title(),
                self.tracker.latest()
            );
            return false;
        }

        log::info!(
            "Loaded {} with {} events",
            result.view.title(),
            result.grid.event_count()
        );
        self.panel = GridPanel::Ready {
            grid: result.grid,
            error: result.error,
        };
        true
    }
}
