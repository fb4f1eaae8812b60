//! Step events for sortviz.
//!
//! This crate defines the vocabulary a sorting engine uses to describe
//! its progress, and the [`StepSink`] capability it describes it to:
//!
//! ```text
//! ┌──────────────┐  StepEvent   ┌──────────────┐
//! │    Engine    │ ───────────► │   StepSink   │ ───► renderer
//! │ (bubble, …)  │   on_step()  │ (capability) │
//! └──────────────┘              └──────────────┘
//! ```
//!
//! Engines depend only on [`StepSink`]; they never see the renderer or
//! its visual mapping (colors, bar heights). The renderer is never read
//! back — the event stream is strictly one-way.
//!
//! # Event Vocabulary
//!
//! | Kind | Meaning | Emitted by |
//! |------|---------|------------|
//! | [`Compare`](StepKind::Compare) | Two indices were compared | bubble, quick |
//! | [`Swap`](StepKind::Swap) | Values moved (swap or shift) | all |
//! | [`PivotMark`](StepKind::PivotMark) | Pivot chosen for a partition | quick |
//! | [`Inserted`](StepKind::Inserted) | Key placed at final scan position | insertion |
//! | [`Settled`](StepKind::Settled) | Highlight reset / position final | all |
//!
//! # Ordering
//!
//! Events for a given run are emitted in the algorithm's logical order,
//! one at a time, with no batching. A renderer may therefore treat each
//! event as the complete delta since the previous one.

mod sink;
mod step;

pub use sink::{NullSink, RecordingSink, StepSink};
pub use step::{StepEvent, StepKind};
