use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Hands out cancellation tokens so that at most one filter run is current.
///
/// Starting a run cancels the previous one first.
#[derive(Debug, Default)]
pub struct FilterSupervisor {
    current: Option<CancellationToken>,
    generation: Arc<AtomicU64>,
}

impl FilterSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the in-flight run, if any, and starts a new one.
    pub fn begin(&mut self) -> FilterTicket {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        FilterTicket {
            token,
            generation,
            latest: Arc::clone(&self.generation),
        }
    }
}

impl Drop for FilterSupervisor {
    fn drop(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

/// One filter run's claim to apply its result.
#[derive(Debug, Clone)]
pub struct FilterTicket {
    token: CancellationToken,
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl FilterTicket {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer run has started and this one was not cancelled.
    ///
    /// Checked right before a result is written to shared state.
    pub fn is_current(&self) -> bool {
        !self.token.is_cancelled() && self.latest.load(Ordering::Acquire) == self.generation
    }
}
