//! Bubble sort — Avg: O(n²)  Worst: O(n²)

use crate::{Interrupted, StepContext};

/// Adjacent-pair bubble sort with early exit.
///
/// Every comparison emits `Compare`. An inversion is swapped (`Swap` +
/// delay), then both indices settle to revert the highlight. Each pass
/// shrinks the inner bound by one: the already-sorted suffix is not
/// re-scanned. A pass with no swap ends the run early — the sequence is
/// already sorted.
pub async fn bubble_sort(cx: &mut StepContext<'_>) -> Result<(), Interrupted> {
    let n = cx.len();
    if n < 2 {
        return Ok(());
    }
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            cx.compare(j, j + 1);
            if cx.value(j) > cx.value(j + 1) {
                swapped = true;
                cx.swap(j, j + 1);
                cx.pace().await?;
                cx.settle(&[j, j + 1]);
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
