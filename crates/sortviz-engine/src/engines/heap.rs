//! Heap sort — Avg: O(n log n)  Worst: O(n log n)

use crate::{Interrupted, StepContext};

/// Two-phase heap sort.
///
/// Phase one builds a max-heap in place, sifting down every internal
/// node from `n/2 - 1` to the root. Phase two repeatedly swaps the root
/// (the current maximum) with the last unsorted index, settles that
/// index as final, and re-sifts the shrunken heap. Every swap —
/// including the ones inside a sift — is a paced `Swap` event; the
/// comparisons inside a sift are not independently visualized.
pub async fn heap_sort(cx: &mut StepContext<'_>) -> Result<(), Interrupted> {
    let n = cx.len();
    if n < 2 {
        return Ok(());
    }

    for i in (0..n / 2).rev() {
        sift_down(cx, n, i).await?;
    }

    for i in (1..n).rev() {
        swap_paced(cx, 0, i).await?;
        cx.settle(&[i]);
        sift_down(cx, i, 0).await?;
    }

    cx.settle_all();
    Ok(())
}

/// Restores the max-heap property for the subtree rooted at `i`,
/// considering only the first `heap_size` elements.
///
/// Written as a loop: each iteration compares the node with its
/// children, swaps with the larger child when out of order, and
/// descends, one paced swap per level.
pub(crate) async fn sift_down(
    cx: &mut StepContext<'_>,
    heap_size: usize,
    mut i: usize,
) -> Result<(), Interrupted> {
    loop {
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        let mut largest = i;

        if l < heap_size && cx.value(l) > cx.value(largest) {
            largest = l;
        }
        if r < heap_size && cx.value(r) > cx.value(largest) {
            largest = r;
        }
        if largest == i {
            return Ok(());
        }

        swap_paced(cx, i, largest).await?;
        i = largest;
    }
}

async fn swap_paced(cx: &mut StepContext<'_>, i: usize, j: usize) -> Result<(), Interrupted> {
    cx.swap(i, j);
    cx.pace().await
}
