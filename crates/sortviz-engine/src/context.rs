//! Step context: the primitives engines are written in.
//!
//! The context bundles the mutable sequence with the sink, pacer, and
//! cancellation token for one run, and exposes the compare/swap/settle
//! vocabulary the four engines share. Engines never touch the sink or
//! the token directly — every observable effect and every suspension
//! point goes through here.

use crate::{CancelToken, Pacer};
use sortviz_event::{StepEvent, StepKind, StepSink};

/// Marker carried by `?` from a suspension point that observed a set
/// cancellation token.
///
/// Not an error: the run task maps it to
/// [`RunOutcome::Cancelled`](crate::RunOutcome::Cancelled). It exists
/// so the deepest partition/sift call can unwind to the run task
/// without completing pending mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

/// Execution context for one run of one engine.
///
/// Indices passed to the primitives must be in bounds; an out-of-range
/// index is an internal invariant violation and panics rather than
/// being silently ignored.
#[derive(Debug)]
pub struct StepContext<'a> {
    seq: &'a mut [u32],
    sink: &'a dyn StepSink,
    pacer: Pacer,
    cancel: CancelToken,
}

impl<'a> StepContext<'a> {
    /// Creates a context over the given sequence.
    #[must_use]
    pub fn new(
        seq: &'a mut [u32],
        sink: &'a dyn StepSink,
        pacer: Pacer,
        cancel: CancelToken,
    ) -> Self {
        Self {
            seq,
            sink,
            pacer,
            cancel,
        }
    }

    /// Returns the sequence length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns the value at `i`.
    #[must_use]
    pub fn value(&self, i: usize) -> u32 {
        self.seq[i]
    }

    /// The suspension point.
    ///
    /// Checks the cancellation token, sleeps for the current per-step
    /// delay, and checks again so a cancellation that arrives during
    /// the sleep still stops the run before its next mutation.
    pub async fn pace(&self) -> Result<(), Interrupted> {
        if self.cancel.is_cancelled() {
            return Err(Interrupted);
        }
        self.pacer.pause().await;
        if self.cancel.is_cancelled() {
            return Err(Interrupted);
        }
        Ok(())
    }

    /// Emits `Compare` for indices `i` and `j`.
    pub fn compare(&self, i: usize, j: usize) {
        self.emit(StepKind::Compare, &[i, j]);
    }

    /// Swaps the values at `i` and `j` and emits `Swap` with the new
    /// values.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.seq.swap(i, j);
        self.emit(StepKind::Swap, &[i, j]);
    }

    /// Overwrites the value at `dest` (an insertion-sort shift) and
    /// emits `Swap` for that single index.
    pub fn shift(&mut self, dest: usize, value: u32) {
        self.seq[dest] = value;
        self.emit(StepKind::Swap, &[dest]);
    }

    /// Places the insertion key at `dest` and emits `Inserted`.
    pub fn place(&mut self, dest: usize, key: u32) {
        self.seq[dest] = key;
        self.emit(StepKind::Inserted, &[dest]);
    }

    /// Emits `PivotMark` for index `i`.
    pub fn mark_pivot(&self, i: usize) {
        self.emit(StepKind::PivotMark, &[i]);
    }

    /// Emits `Settled` for the given indices.
    pub fn settle(&self, indices: &[usize]) {
        self.emit(StepKind::Settled, indices);
    }

    /// Emits `Settled` for every index.
    pub fn settle_all(&self) {
        let all: Vec<usize> = (0..self.seq.len()).collect();
        self.emit(StepKind::Settled, &all);
    }

    /// Emits `Settled` for every index except `keep`.
    pub fn settle_all_except(&self, keep: usize) {
        let rest: Vec<usize> = (0..self.seq.len()).filter(|&k| k != keep).collect();
        self.emit(StepKind::Settled, &rest);
    }

    fn emit(&self, kind: StepKind, indices: &[usize]) {
        let values = indices.iter().map(|&i| self.seq[i]).collect();
        self.sink
            .on_step(&StepEvent::new(kind, indices.to_vec(), values));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Speed;
    use sortviz_event::RecordingSink;

    fn context<'a>(seq: &'a mut [u32], sink: &'a RecordingSink) -> StepContext<'a> {
        StepContext::new(seq, sink, Pacer::new(Speed::new(0)), CancelToken::new())
    }

    #[test]
    fn swap_mutates_and_reports_new_values() {
        let sink = RecordingSink::new();
        let mut seq = vec![5, 3];
        let mut cx = context(&mut seq, &sink);

        cx.swap(0, 1);
        drop(cx);

        assert_eq!(seq, [3, 5]);
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_swap());
        assert_eq!(events[0].values, [3, 5]);
    }

    #[test]
    fn compare_reads_without_mutating() {
        let sink = RecordingSink::new();
        let mut seq = vec![5, 3];
        let cx = context(&mut seq, &sink);

        cx.compare(0, 1);

        let events = sink.events();
        assert!(events[0].is_compare());
        assert_eq!(events[0].values, [5, 3]);
        drop(cx);
        assert_eq!(seq, [5, 3]);
    }

    #[test]
    fn shift_and_place() {
        let sink = RecordingSink::new();
        let mut seq = vec![2, 9, 9];
        let mut cx = context(&mut seq, &sink);

        cx.shift(2, 9);
        cx.place(1, 4);
        drop(cx);

        assert_eq!(seq, [2, 4, 9]);
        let events = sink.events();
        assert_eq!(events[0].kind, StepKind::Swap);
        assert_eq!(events[0].indices, [2]);
        assert_eq!(events[1].kind, StepKind::Inserted);
        assert_eq!(events[1].values, [4]);
    }

    #[test]
    fn settle_all_except_skips_index() {
        let sink = RecordingSink::new();
        let mut seq = vec![1, 2, 3, 4];
        let cx = context(&mut seq, &sink);

        cx.settle_all_except(2);

        let events = sink.events();
        assert_eq!(events[0].kind, StepKind::Settled);
        assert_eq!(events[0].indices, [0, 1, 3]);
    }

    #[tokio::test]
    async fn pace_interrupts_when_cancelled() {
        let sink = RecordingSink::new();
        let mut seq = vec![1, 2];
        let cancel = CancelToken::new();
        let cx = StepContext::new(
            &mut seq,
            &sink,
            Pacer::new(Speed::new(0)),
            cancel.clone(),
        );

        assert_eq!(cx.pace().await, Ok(()));

        cancel.cancel();
        assert_eq!(cx.pace().await, Err(Interrupted));
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let sink = RecordingSink::new();
        let mut seq = vec![1];
        let cx = context(&mut seq, &sink);
        cx.compare(0, 5);
    }
}
