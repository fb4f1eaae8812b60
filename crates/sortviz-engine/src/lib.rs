//! Sorting engines for sortviz.
//!
//! This crate turns four classic in-place sorting algorithms (bubble,
//! quick, insertion, heap) into observable, cancellable, step-by-step
//! processes. The algorithms mutate the sequence through a small set of
//! compare/swap primitives that emit [`StepEvent`]s and cooperatively
//! suspend between mutations, so a renderer can animate every step at a
//! user-controlled speed.
//!
//! # Architecture
//!
//! ```text
//!                 ┌─────────────────────────────────┐
//!                 │           RunManager            │
//!  run(kind, seq) │  - single active run invariant  │
//!  set_speed(ms)  │  - shared Speed                 │
//!                 └────────────┬────────────────────┘
//!                              │ spawns (tokio task)
//!                              ▼
//!                 ┌─────────────────────────────────┐
//!                 │            run task             │
//!                 │  StepContext                    │
//!                 │   ├── seq: &mut [u32]           │
//!                 │   ├── sink: &dyn StepSink ──────┼──► renderer
//!                 │   ├── Pacer (reads Speed) ──────┼──► sleep per step
//!                 │   └── CancelToken ◄─────────────┼─── handle.cancel()
//!                 └─────────────────────────────────┘
//! ```
//!
//! # Run Lifecycle
//!
//! ```text
//! Idle → Running → { Completed | Cancelled }
//! ```
//!
//! `Running` is the only suspend-capable state; suspension points occur
//! exactly at the pacing delays between discrete mutations. The
//! cancellation token is checked at every suspension point, so a
//! cancelled run stops before its next mutation. Completion leaves the
//! sequence sorted ascending.
//!
//! # Single Active Run
//!
//! At most one run mutates visual state at a time. Starting a new run
//! cancels the previous one and waits for it to reach a terminal state
//! before the new engine touches anything — two engines never race on
//! the shared renderer.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sortviz_engine::{generate_sequence, RunManager, RunOutcome};
//! use sortviz_event::RecordingSink;
//! use sortviz_types::AlgorithmKind;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sink = RecordingSink::new();
//! let manager = RunManager::new(Arc::new(sink.clone()));
//!
//! let handle = manager
//!     .run(AlgorithmKind::Bubble, generate_sequence(16), 0)
//!     .await;
//! let report = handle.join().await.unwrap();
//!
//! assert_eq!(report.outcome, RunOutcome::Completed);
//! assert!(report.sequence.windows(2).all(|w| w[0] <= w[1]));
//! # }
//! ```

mod cancel;
mod config;
mod context;
mod error;
mod manager;
mod pace;
mod runner;
mod sequence;
mod status;

pub mod engines;

pub use cancel::CancelToken;
pub use config::VizConfig;
pub use context::{Interrupted, StepContext};
pub use error::RunError;
pub use manager::RunManager;
pub use pace::{Pacer, Speed};
pub use runner::{RunHandle, RunOutcome, RunReport};
pub use sequence::{generate_sequence, generate_sequence_in, Sequence};
pub use status::RunStatus;
