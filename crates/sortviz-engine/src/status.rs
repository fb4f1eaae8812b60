//! Run status lifecycle.

use serde::{Deserialize, Serialize};

/// The state of a run.
///
/// # Lifecycle
///
/// ```text
/// Idle → Running → { Completed | Cancelled }
/// ```
///
/// | State | Terminal | Sequence guarantee |
/// |-------|----------|--------------------|
/// | `Idle` | no | untouched |
/// | `Running` | no | partially mutated |
/// | `Completed` | yes | sorted ascending |
/// | `Cancelled` | yes | consistent, not necessarily sorted |
///
/// Cancellation is a normal terminal state, not an error: the engine
/// stops at a suspension point, so the sequence is never left with a
/// half-applied swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Run created but the engine has not started stepping yet.
    #[default]
    Idle,

    /// The engine is stepping through the sequence.
    ///
    /// The only suspend-capable state; suspension happens at pacing
    /// delays between mutations.
    Running,

    /// All steps completed; the sequence is sorted ascending.
    Completed,

    /// The run was cancelled at a suspension point.
    Cancelled,
}

impl RunStatus {
    /// Returns `true` if the run has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns `true` if the engine is actively stepping.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Cancelled.is_terminal());
        assert!(!RunStatus::Idle.is_terminal());
        assert!(!RunStatus::Running.is_terminal());
    }

    #[test]
    fn running_state() {
        assert!(RunStatus::Running.is_running());
        assert!(!RunStatus::Completed.is_running());
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(RunStatus::default(), RunStatus::Idle);
    }

    #[test]
    fn display() {
        assert_eq!(RunStatus::Cancelled.to_string(), "cancelled");
    }
}
