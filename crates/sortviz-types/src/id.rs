//! Identifier types for sortviz.
//!
//! Run identifiers are UUID-based so that log lines and recorded event
//! streams from different runs can never be confused with one another.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single sorting run.
///
/// A run is one end-to-end execution of a chosen algorithm against a
/// sequence. Every run gets a fresh random UUID v4, so a stale run's
/// log lines remain attributable after it has been superseded.
///
/// # Example
///
/// ```
/// use sortviz_types::RunId;
///
/// let a = RunId::new();
/// let b = RunId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random [`RunId`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form is enough for log attribution.
        write!(f, "run-{}", &self.0.as_simple().to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_unique() {
        let a = RunId::new();
        let b = RunId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn run_id_display_short() {
        let id = RunId::new();
        let s = id.to_string();
        assert!(s.starts_with("run-"));
        assert_eq!(s.len(), "run-".len() + 8);
    }

    #[test]
    fn run_id_serde_round_trip() {
        let id = RunId::new();
        let json = serde_json::to_string(&id).unwrap();
        let restored: RunId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
