//! Quick sort — Avg: O(n log n)  Worst: O(n²)

use crate::{Interrupted, StepContext};

/// Recursive divide-and-conquer with Lomuto partitioning.
///
/// The recursion is driven by an explicit stack so the suspension
/// points sit in one loop rather than behind boxed futures; the
/// subrange order (left before right) matches the recursive form, so
/// the emitted event order is identical. When the whole range has been
/// partitioned down to singletons, every index settles.
pub async fn quick_sort(cx: &mut StepContext<'_>) -> Result<(), Interrupted> {
    if cx.len() < 2 {
        return Ok(());
    }
    let mut pending = vec![(0usize, cx.len() - 1)];

    while let Some((lo, hi)) = pending.pop() {
        // Empty and singleton ranges are base cases: no events.
        if lo >= hi {
            continue;
        }
        let p = partition(cx, lo, hi).await?;
        // Right subrange first so the left is popped (and sorted) first.
        pending.push((p + 1, hi));
        if p > lo {
            pending.push((lo, p - 1));
        }
    }

    cx.settle_all();
    Ok(())
}

/// Lomuto partition over `[lo, hi]` with `seq[hi]` as the pivot.
///
/// Marks the pivot, scans `lo..hi` emitting `Compare(j, hi)` per
/// element, and grows the less-than region with paced swaps. The
/// comparison is strictly-less: elements equal to the pivot stay on the
/// right, which shapes partition balance but not correctness. Finally
/// the pivot swaps into the slot just past the less-than region — its
/// sorted position — and that index is returned.
pub(crate) async fn partition(
    cx: &mut StepContext<'_>,
    lo: usize,
    hi: usize,
) -> Result<usize, Interrupted> {
    let pivot = cx.value(hi);
    // Next free slot of the less-than region.
    let mut i = lo;

    cx.mark_pivot(hi);
    cx.pace().await?;

    for j in lo..hi {
        cx.compare(j, hi);
        if cx.value(j) < pivot {
            cx.swap(i, j);
            cx.pace().await?;
            cx.settle(&[i, j]);
            i += 1;
        }
    }

    cx.swap(i, hi);
    cx.pace().await?;
    Ok(i)
}
