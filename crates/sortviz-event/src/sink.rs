//! Step sink trait and stock implementations.
//!
//! The sink is the narrow interface between the engines and whatever
//! renders them. The concrete renderer lives outside this workspace;
//! here we ship a discarding sink and a recording sink for tests.
//!
//! # Usage
//!
//! ```
//! use sortviz_event::{RecordingSink, StepEvent, StepKind, StepSink};
//!
//! let sink = RecordingSink::new();
//! sink.on_step(&StepEvent::new(StepKind::Compare, vec![0, 1], vec![3, 5]));
//! assert_eq!(sink.events().len(), 1);
//! ```

use crate::StepEvent;
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// Capability for observing step events.
///
/// Engines invoke [`on_step`](Self::on_step) after every comparison,
/// swap, and settle, before the pacing delay for that step. The call
/// must be cheap and non-blocking; a renderer that needs to do real
/// work should hand the event off (e.g. into a channel) rather than
/// process it inline.
///
/// The sink is shared by reference across await points, so
/// implementations must be `Send + Sync`.
pub trait StepSink: Send + Sync + Debug {
    /// Called once per step event, in the algorithm's logical order.
    fn on_step(&self, event: &StepEvent);
}

/// A sink that discards every event.
///
/// Useful for benchmarking an engine's pure sorting behavior and as a
/// default when no renderer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StepSink for NullSink {
    fn on_step(&self, _event: &StepEvent) {}
}

/// A sink that records every event for later inspection.
///
/// Cloning is cheap and clones observe the same buffer, so a test can
/// keep one handle while the run task owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<StepEvent>>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded events, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<StepEvent> {
        self.events.lock().clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Counts recorded events matching a predicate.
    pub fn count_where<F: Fn(&StepEvent) -> bool>(&self, pred: F) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }

    /// Clears the recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl StepSink for RecordingSink {
    fn on_step(&self, event: &StepEvent) {
        self.events.lock().push(event.clone());
    }
}
