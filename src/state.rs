use std::future::Future;

use log::debug;
use tokio::sync::mpsc;

use crate::error::FetchError;

/// Lifecycle of a single fetch operation, as seen by the presentation
/// layer. Replaced wholesale on each transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No fetch has been started yet
    #[default]
    Idle,
    /// A fetch is running
    Loading,
    /// The most recent applied fetch finished with a value
    Success(T),
    /// The most recent applied fetch failed; the message is displayable as-is
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The fetched value, if the last fetch succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Single-owner fetch state machine.
///
/// `start` runs the fetch as a tokio task; the task posts its result back
/// over a channel and only the owner applies it to the state. Starting a
/// second fetch while one is in flight issues an independent request with
/// no de-duplication and no cancellation; whichever completion arrives
/// last determines the final state.
pub struct FetchController<T> {
    state: FetchState<T>,
    in_flight: usize,
    completions_tx: mpsc::UnboundedSender<Result<T, FetchError>>,
    completions_rx: mpsc::UnboundedReceiver<Result<T, FetchError>>,
}

impl<T: Send + 'static> FetchController<T> {
    pub fn new() -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: FetchState::Idle,
            in_flight: 0,
            completions_tx,
            completions_rx,
        }
    }

    /// Current state. Valid to read at any time.
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Number of fetches started but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Move to `Loading` and run `fut` on the runtime. Never blocks the
    /// caller; the result is applied when the owner next calls one of
    /// the `apply_*` methods.
    pub fn start<F>(&mut self, fut: F)
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        self.state = FetchState::Loading;
        self.in_flight += 1;

        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            // The owner may be gone by the time the fetch finishes;
            // nothing left to notify then.
            let _ = completions.send(fut.await);
        });
    }

    /// Apply every completion received so far, in arrival order.
    /// Returns the number applied.
    pub fn apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.completions_rx.try_recv() {
            self.apply(result);
            applied += 1;
        }
        applied
    }

    /// Wait for one completion and apply it. Returns `false` without
    /// waiting when no fetch is in flight.
    pub async fn apply_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        // The sender half lives on self, so recv cannot yield None here.
        if let Some(result) = self.completions_rx.recv().await {
            self.apply(result);
        }
        true
    }

    /// Apply completions until every started fetch has reported back.
    pub async fn settle(&mut self) {
        while self.apply_next().await {}
    }

    fn apply(&mut self, result: Result<T, FetchError>) {
        self.in_flight -= 1;
        self.state = match result {
            Ok(value) => FetchState::Success(value),
            Err(err) => {
                debug!("fetch failed: {err}");
                FetchState::Failure(err.to_string())
            }
        };
    }
}

impl<T: Send + 'static> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}
