//! Single-active-run management.

use crate::runner::{self, RunGuard, RunHandle};
use crate::{Sequence, Speed, VizConfig};
use sortviz_event::StepSink;
use sortviz_types::AlgorithmKind;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Owns the shared speed and enforces the single-active-run invariant.
///
/// At most one run may mutate visual state at a time. [`run`](Self::run)
/// therefore cancels any in-flight run and waits for it to reach a
/// terminal state before spawning the next engine — rapid re-triggering
/// (re-run, randomize, algorithm switch) can never leave two engines
/// racing on the same renderer.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sortviz_engine::{generate_sequence, RunManager};
/// use sortviz_event::NullSink;
/// use sortviz_types::AlgorithmKind;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let manager = RunManager::new(Arc::new(NullSink));
///
/// let handle = manager
///     .run(AlgorithmKind::Heap, generate_sequence(32), 0)
///     .await;
/// manager.set_speed(10); // takes effect on the run's next delay
/// handle.join().await.unwrap();
/// # }
/// ```
#[derive(Debug)]
pub struct RunManager {
    sink: Arc<dyn StepSink>,
    speed: Speed,
    active: Mutex<Option<RunGuard>>,
}

impl RunManager {
    /// Creates a manager with default configuration.
    #[must_use]
    pub fn new(sink: Arc<dyn StepSink>) -> Self {
        Self::with_config(sink, &VizConfig::default())
    }

    /// Creates a manager with the given configuration.
    #[must_use]
    pub fn with_config(sink: Arc<dyn StepSink>, config: &VizConfig) -> Self {
        Self {
            sink,
            speed: Speed::new(config.speed_ms),
            active: Mutex::new(None),
        }
    }

    /// Starts a run, superseding any in-flight run first.
    ///
    /// The previous run is cancelled and awaited to quiescence before
    /// the new task is spawned; only then can the new engine emit its
    /// first event. `speed_ms` becomes the shared speed for this run
    /// (adjustable later via [`set_speed`](Self::set_speed)).
    pub async fn run(
        &self,
        kind: AlgorithmKind,
        sequence: Sequence,
        speed_ms: u64,
    ) -> RunHandle {
        let mut active = self.active.lock().await;
        if let Some(prev) = active.take() {
            prev.stop().await;
        }

        self.speed.set(speed_ms);
        debug!(%kind, len = sequence.len(), speed_ms, "starting run");
        let (handle, guard) = runner::spawn(kind, sequence, self.sink.clone(), self.speed.clone());
        *active = Some(guard);
        handle
    }

    /// Cancels the active run, if any, and waits for it to stop.
    ///
    /// Used when the visual state is about to be replaced (randomize,
    /// algorithm switch) without starting a new run yet.
    pub async fn cancel_active(&self) {
        if let Some(prev) = self.active.lock().await.take() {
            prev.stop().await;
        }
    }

    /// Updates the shared per-step delay.
    ///
    /// Read by the active run at each of its future delay calls.
    pub fn set_speed(&self, millis: u64) {
        self.speed.set(millis);
    }

    /// The current per-step delay in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed.get()
    }
}
