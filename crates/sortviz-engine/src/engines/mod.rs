//! The four algorithm engines.
//!
//! Each engine is a sequential async process over a [`StepContext`]:
//! it mutates the sequence in place through the context's compare/swap
//! primitives, emits a step event for every observable action, and
//! suspends at [`pace`](StepContext::pace) between mutations. The `?`
//! on every `pace` call is the cancellation path — a set token unwinds
//! the engine from its deepest partition or sift without completing
//! pending mutations.
//!
//! # Relative cost
//!
//! None of the engines optimize beyond their textbook complexity class;
//! the point is to visualize the class, not beat it.

mod bubble;
mod heap;
mod insertion;
mod quick;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use quick::quick_sort;

use crate::{Interrupted, StepContext};
use sortviz_types::AlgorithmKind;

/// Runs the engine for `kind` to completion or interruption.
///
/// Length 0 and 1 sequences are trivially sorted: every engine
/// completes immediately and emits no events.
pub async fn drive(kind: AlgorithmKind, cx: &mut StepContext<'_>) -> Result<(), Interrupted> {
    match kind {
        AlgorithmKind::Bubble => bubble_sort(cx).await,
        AlgorithmKind::Quick => quick_sort(cx).await,
        AlgorithmKind::Insertion => insertion_sort(cx).await,
        AlgorithmKind::Heap => heap_sort(cx).await,
    }
}
