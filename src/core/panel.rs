use crate::domain::model::PanelStatus;
use crate::domain::ports::PanelSource;
use crate::utils::error::Result;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared state cell for one panel. Cloning shares the underlying cell.
///
/// `complete` overwrites unconditionally: when two loads overlap, whichever
/// completes last determines the final state (completion order, not issue
/// order). Revisit here if that policy ever changes.
#[derive(Debug)]
pub struct PanelCell<T> {
    inner: Arc<Mutex<PanelStatus<T>>>,
    name: &'static str,
}

impl<T> Clone for PanelCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            name: self.name,
        }
    }
}

impl<T: Clone> PanelCell<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PanelStatus::Idle)),
            name,
        }
    }

    pub fn snapshot(&self) -> PanelStatus<T> {
        self.lock().clone()
    }

    pub(crate) fn set_loading(&self) {
        tracing::debug!(panel = self.name, "load started");
        *self.lock() = PanelStatus::Loading;
    }

    pub(crate) fn complete(&self, outcome: Result<T>) {
        let status = match outcome {
            Ok(data) => {
                tracing::debug!(panel = self.name, "load completed");
                PanelStatus::Ready(data)
            }
            Err(e) => {
                tracing::warn!(panel = self.name, error = %e, "load failed");
                PanelStatus::Failed(e.kind())
            }
        };
        *self.lock() = status;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PanelStatus<T>> {
        // A poisoned cell only means a panicked test observer; the status
        // value itself is always valid.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One independently loading, independently failing dashboard panel.
///
/// `load` owns the full Loading -> Ready|Failed cycle for a single call and
/// never lets an error escape: transport and shape failures are absorbed into
/// the panel's own state. No retries; callers re-invoke `load` to retry.
pub struct Panel<S: PanelSource> {
    cell: PanelCell<S::Output>,
    source: Arc<S>,
}

impl<S: PanelSource> Clone for Panel<S> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: PanelSource> Panel<S> {
    pub fn new(name: &'static str, source: S) -> Self {
        Self {
            cell: PanelCell::new(name),
            source: Arc::new(source),
        }
    }

    pub fn status(&self) -> PanelStatus<S::Output> {
        self.cell.snapshot()
    }

    /// Loading is set synchronously, before the fetch suspends, so observers
    /// see the transition as soon as the call is issued.
    pub async fn load(&self, input: S::Input) {
        self.cell.set_loading();
        let outcome = self.source.fetch(input).await;
        self.cell.complete(outcome);
    }
}
