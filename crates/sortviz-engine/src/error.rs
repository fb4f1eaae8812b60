//! Run-level errors.
//!
//! The error surface is deliberately small. Cancellation is not an
//! error (it is a normal terminal outcome), trivially short sequences
//! are not an error (they complete immediately), and out-of-range
//! indices inside an engine are programming errors that panic. What
//! remains is the run task itself failing while being awaited.

use sortviz_types::ErrorCode;
use thiserror::Error;

/// Errors surfaced when joining a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The run task panicked or was aborted at the runtime level.
    ///
    /// The sequence owned by that task is lost; the manager stays
    /// usable, and the next run operates on an independent sequence.
    #[error("run task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ErrorCode for RunError {
    fn code(&self) -> &'static str {
        match self {
            Self::Join(_) => "RUN_TASK_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        // The failed run is gone, but starting a new run works.
        match self {
            Self::Join(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_types::assert_error_code;

    #[tokio::test]
    async fn join_error_code() {
        let handle = tokio::spawn(async { panic!("boom") });
        let join_err = handle.await.unwrap_err();

        let err = RunError::from(join_err);
        assert_error_code(&err, "RUN_");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("run task failed"));
    }
}
