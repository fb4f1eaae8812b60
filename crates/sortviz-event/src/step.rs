//! Step event types.
//!
//! A [`StepEvent`] is a transient record of one discrete thing an
//! engine just did to the sequence. It is produced by the engine,
//! handed to the sink, and not retained by the core.

use serde::{Deserialize, Serialize};

/// The kind of step an engine reports.
///
/// # Variants
///
/// | Kind | Indices | Typical renderer reaction |
/// |------|---------|---------------------------|
/// | `Compare` | the two compared | highlight both |
/// | `Swap` | the indices whose values changed | update heights, highlight |
/// | `PivotMark` | the pivot | distinct pivot color |
/// | `Inserted` | the placement index | distinct placement color |
/// | `Settled` | indices whose highlight resets | revert to base color |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Two indices were compared.
    Compare,

    /// Values at the given indices changed.
    ///
    /// Covers both true swaps and insertion-sort shifts; in both cases
    /// the event carries the values now at those indices.
    Swap,

    /// The index was chosen as a partition pivot.
    PivotMark,

    /// The insertion key was placed at its scan-final position.
    Inserted,

    /// The indices reached a visually final state for this step.
    ///
    /// Used both to revert a transient highlight and to mark an index
    /// as sorted-into-place (heap extraction, end-of-run sweeps).
    Settled,
}

/// A discrete notification emitted during a run.
///
/// `indices` and `values` are parallel: `values[k]` is the value
/// currently at `indices[k]`, read *after* the mutation the event
/// describes. The renderer owns the mapping from value to bar height.
///
/// # Example
///
/// ```
/// use sortviz_event::{StepEvent, StepKind};
///
/// let event = StepEvent::new(StepKind::Swap, vec![2, 3], vec![10, 40]);
/// assert!(event.is_swap());
/// assert_eq!(event.indices, [2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// What happened.
    pub kind: StepKind,
    /// The indices involved.
    pub indices: Vec<usize>,
    /// The values currently at those indices.
    pub values: Vec<u32>,
}

impl StepEvent {
    /// Creates a new step event.
    ///
    /// `indices` and `values` must be the same length.
    #[must_use]
    pub fn new(kind: StepKind, indices: Vec<usize>, values: Vec<u32>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        Self {
            kind,
            indices,
            values,
        }
    }

    /// Returns `true` if this is a [`StepKind::Compare`] event.
    #[must_use]
    pub fn is_compare(&self) -> bool {
        matches!(self.kind, StepKind::Compare)
    }

    /// Returns `true` if this is a [`StepKind::Swap`] event.
    #[must_use]
    pub fn is_swap(&self) -> bool {
        matches!(self.kind, StepKind::Swap)
    }

    /// Returns `true` if this is a [`StepKind::Settled`] event.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self.kind, StepKind::Settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_predicates() {
        let compare = StepEvent::new(StepKind::Compare, vec![0, 1], vec![5, 3]);
        assert!(compare.is_compare());
        assert!(!compare.is_swap());

        let swap = StepEvent::new(StepKind::Swap, vec![0, 1], vec![3, 5]);
        assert!(swap.is_swap());

        let settled = StepEvent::new(StepKind::Settled, vec![0], vec![3]);
        assert!(settled.is_settled());
    }

    #[test]
    fn parallel_indices_and_values() {
        let event = StepEvent::new(StepKind::Swap, vec![4, 7], vec![1, 9]);
        assert_eq!(event.indices.len(), event.values.len());
    }

    #[test]
    fn kind_serde_snake_case() {
        let json = serde_json::to_string(&StepKind::PivotMark).unwrap();
        assert_eq!(json, "\"pivot_mark\"");
    }

    #[test]
    fn event_serde_round_trip() {
        let event = StepEvent::new(StepKind::Inserted, vec![2], vec![42]);
        let json = serde_json::to_string(&event).unwrap();
        let restored: StepEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, restored);
    }
}
