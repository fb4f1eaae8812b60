//! Insertion sort — Avg: O(n²)  Worst: O(n²)

use crate::{Interrupted, StepContext};

/// Insertion sort with backward shifting.
///
/// For each key, elements greater than it shift one slot right, each
/// shift a paced single-index `Swap` followed by a settle of every
/// other index (resetting stale highlights). The key then lands with a
/// distinct `Inserted` event. A sorted input performs zero shifts and
/// only emits placements.
pub async fn insertion_sort(cx: &mut StepContext<'_>) -> Result<(), Interrupted> {
    let n = cx.len();
    if n < 2 {
        return Ok(());
    }
    for i in 1..n {
        let key = cx.value(i);
        let mut j = i;
        while j > 0 && cx.value(j - 1) > key {
            cx.shift(j, cx.value(j - 1));
            cx.pace().await?;
            cx.settle_all_except(j);
            j -= 1;
        }
        cx.place(j, key);
        cx.pace().await?;
    }
    cx.settle_all();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CancelToken, Pacer, Speed};
    use sortviz_event::{RecordingSink, StepEvent, StepKind};

    async fn run(seq: &mut Vec<u32>) -> RecordingSink {
        let sink = RecordingSink::new();
        let mut cx = StepContext::new(
            seq,
            &sink,
            Pacer::new(Speed::new(0)),
            CancelToken::new(),
        );
        insertion_sort(&mut cx).await.unwrap();
        sink
    }

    #[tokio::test]
    async fn sorts_reference_input() {
        let mut seq = vec![5, 3, 4, 1, 2];
        run(&mut seq).await;
        assert_eq!(seq, [1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn sorted_input_shifts_nothing() {
        let mut seq = vec![1, 2, 3, 4];
        let sink = run(&mut seq).await;

        assert_eq!(sink.count_where(StepEvent::is_swap), 0);
        // Every key still gets its placement event.
        assert_eq!(
            sink.count_where(|e| e.kind == StepKind::Inserted),
            3
        );
    }

    #[tokio::test]
    async fn each_shift_settles_the_rest() {
        let mut seq = vec![2, 1];
        let sink = run(&mut seq).await;

        let events = sink.events();
        // shift of 2 into slot 1, settle-all-except, insert of 1, final settle.
        assert_eq!(events[0].kind, StepKind::Swap);
        assert_eq!(events[0].indices, [1]);
        assert_eq!(events[1].kind, StepKind::Settled);
        assert_eq!(events[1].indices, [0]);
        assert_eq!(events[2].kind, StepKind::Inserted);
        assert_eq!(events[2].indices, [0]);
        assert_eq!(events[3].kind, StepKind::Settled);
        assert_eq!(events[3].indices, [0, 1]);
    }

    #[tokio::test]
    async fn sorts_reverse_and_duplicate_inputs() {
        for mut seq in [vec![5, 4, 3, 2, 1], vec![2, 1, 2, 1]] {
            let mut expected = seq.clone();
            expected.sort_unstable();
            run(&mut seq).await;
            assert_eq!(seq, expected);
        }
    }

    #[tokio::test]
    async fn run_ends_settled() {
        let mut seq = vec![3, 1, 2];
        let sink = run(&mut seq).await;
        let events = sink.events();
        assert!(events.last().unwrap().is_settled());
        assert_eq!(events.last().unwrap().indices.len(), 3);
    }
}
