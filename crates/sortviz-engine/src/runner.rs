//! The run task.
//!
//! A run is one spawned tokio task driving one engine over one owned
//! sequence. The task publishes its lifecycle on a watch channel
//! (`Idle → Running → terminal`) so the manager can wait for a
//! superseded run to actually stop mutating before starting the next
//! one, and hands the sequence back in its [`RunReport`].

use crate::{engines, CancelToken, Interrupted, Pacer, RunError, RunStatus, Sequence, Speed, StepContext};
use sortviz_event::StepSink;
use sortviz_types::{AlgorithmKind, RunId};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    /// Every step completed; the sequence is sorted ascending.
    Completed,
    /// The run stopped at a suspension point after cancellation.
    Cancelled,
}

/// Terminal record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The run's identifier.
    pub id: RunId,
    /// Which algorithm ran.
    pub kind: AlgorithmKind,
    /// How the run ended.
    pub outcome: RunOutcome,
    /// The sequence, returned to the caller. Sorted ascending iff
    /// `outcome` is [`RunOutcome::Completed`]; a consistent permutation
    /// of the input either way.
    pub sequence: Sequence,
}

/// Caller-side handle for a spawned run.
///
/// Exposes cancellation, the current lifecycle state, and the
/// completion signal for one run.
#[derive(Debug)]
pub struct RunHandle {
    id: RunId,
    kind: AlgorithmKind,
    cancel: CancelToken,
    status: watch::Receiver<RunStatus>,
    task: JoinHandle<RunReport>,
}

impl RunHandle {
    /// The run's identifier.
    #[must_use]
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Which algorithm this run executes.
    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// Requests cancellation; the run stops at its next suspension
    /// point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The run's current lifecycle state.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        *self.status.borrow()
    }

    /// Waits for the run to finish and returns its report.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Join`] if the run task panicked.
    pub async fn join(self) -> Result<RunReport, RunError> {
        Ok(self.task.await?)
    }
}

/// Manager-side guard for the active run.
///
/// Holds just enough to supersede the run: its token and its status
/// channel. The caller keeps the [`RunHandle`] (and with it the join
/// handle); the guard never consumes the report.
#[derive(Debug)]
pub(crate) struct RunGuard {
    id: RunId,
    cancel: CancelToken,
    status: watch::Receiver<RunStatus>,
}

impl RunGuard {
    /// Cancels the run and waits until it has reached a terminal state.
    ///
    /// After this returns, the superseded task will never mutate its
    /// sequence or emit another event. A dropped status sender (the
    /// task panicked) also counts as stopped.
    pub(crate) async fn stop(mut self) {
        self.cancel.cancel();
        debug!(id = %self.id, "stopping active run");
        while !self.status.borrow().is_terminal() {
            if self.status.changed().await.is_err() {
                break;
            }
        }
    }
}

/// Spawns the run task for `kind` over `sequence`.
pub(crate) fn spawn(
    kind: AlgorithmKind,
    mut sequence: Sequence,
    sink: Arc<dyn StepSink>,
    speed: Speed,
) -> (RunHandle, RunGuard) {
    let id = RunId::new();
    let cancel = CancelToken::new();
    let (status_tx, status_rx) = watch::channel(RunStatus::Idle);

    let task_cancel = cancel.clone();
    let task = tokio::spawn(async move {
        let _ = status_tx.send(RunStatus::Running);
        debug!(%id, %kind, len = sequence.len(), "run started");

        let result = {
            let mut cx = StepContext::new(
                &mut sequence,
                sink.as_ref(),
                Pacer::new(speed),
                task_cancel,
            );
            engines::drive(kind, &mut cx).await
        };

        let (outcome, status) = match result {
            Ok(()) => (RunOutcome::Completed, RunStatus::Completed),
            Err(Interrupted) => (RunOutcome::Cancelled, RunStatus::Cancelled),
        };
        debug!(%id, %status, "run finished");
        let _ = status_tx.send(status);

        RunReport {
            id,
            kind,
            outcome,
            sequence,
        }
    });

    let handle = RunHandle {
        id,
        kind,
        cancel: cancel.clone(),
        status: status_rx.clone(),
        task,
    };
    let guard = RunGuard {
        id,
        cancel,
        status: status_rx,
    };
    (handle, guard)
}
