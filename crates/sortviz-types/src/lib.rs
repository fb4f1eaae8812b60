//! Core types for sortviz.
//!
//! This crate is the leaf of the sortviz workspace:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  sortviz-types  : RunId, AlgorithmKind, ErrorCode  ◄── HERE │
//! │  sortviz-event  : StepKind, StepEvent, StepSink             │
//! │  sortviz-engine : engines, pacing, cancellation, RunManager │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is plain data: identifiers for runs, the algorithm
//! selector, and the unified error-code interface implemented by error
//! types in the higher crates.

mod error;
mod id;
mod kind;

pub use error::{assert_error_code, ErrorCode};
pub use id::RunId;
pub use kind::{AlgorithmKind, UnknownAlgorithm};
