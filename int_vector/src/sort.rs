use rand::Rng;

use crate::config::PivotPolicy;

/// Sorts `values` ascending with bubble sort and returns the number of passes made.
///
/// Each pass shrinks the scanned range by one, since the largest remaining value
/// has settled at its end. A pass without swaps ends the sort early, so sorted
/// input costs a single pass.
pub fn bubble_sort(values: &mut [i32]) -> usize {
    let mut passes = 0;
    let mut end = values.len();
    let mut swapped = true;

    while swapped && end > 1 {
        swapped = false;
        passes += 1;
        for j in 1..end {
            if values[j - 1] > values[j] {
                values.swap(j - 1, j);
                swapped = true;
            }
        }
        end -= 1;
    }

    passes
}

/// Sorts `values` ascending with quicksort, choosing pivots with `policy`.
///
/// Average O(n log n). `PivotPolicy::First` and `PivotPolicy::Last` take O(n^2)
/// time on already sorted input; stack depth is O(log n) for every policy.
pub fn quick_sort(values: &mut [i32], policy: PivotPolicy) {
    let mut rng = rand::rng();
    sort_range(values, 0, values.len(), policy, &mut rng);
}

fn sort_range<R: Rng + ?Sized>(
    values: &mut [i32],
    mut lo: usize,
    mut hi: usize,
    policy: PivotPolicy,
    rng: &mut R,
) {
    loop {
        match hi - lo {
            0 | 1 => return,
            2 => {
                if values[lo] > values[lo + 1] {
                    values.swap(lo, lo + 1);
                }
                return;
            }
            _ => {}
        }

        let mid = partition(values, lo, hi, policy, rng);

        // Recurse into the smaller side, loop on the larger one.
        if mid - lo < hi - (mid + 1) {
            sort_range(values, lo, mid, policy, rng);
            lo = mid + 1;
        } else {
            sort_range(values, mid + 1, hi, policy, rng);
            hi = mid;
        }
    }
}

/// Partitions `[lo, hi)` around a pivot and returns the pivot's final index.
///
/// Everything in `[lo, mid)` is `<=` the pivot and everything in `(mid, hi)`
/// is `>=` it. Requires `hi - lo >= 3`.
fn partition<R: Rng + ?Sized>(
    values: &mut [i32],
    lo: usize,
    hi: usize,
    policy: PivotPolicy,
    rng: &mut R,
) -> usize {
    let p = select_pivot(values, lo, hi, policy, rng);
    values.swap(lo, p);
    let pivot = values[lo];

    let mut left = lo + 1;
    let mut right = hi - 1;
    loop {
        while left <= right && values[left] <= pivot {
            left += 1;
        }
        while left <= right && values[right] >= pivot {
            right -= 1;
        }
        if left < right {
            values.swap(left, right);
        } else {
            break;
        }
    }

    // right == left - 1: the last slot of the `<= pivot` side.
    values.swap(lo, right);
    right
}

fn select_pivot<R: Rng + ?Sized>(
    values: &[i32],
    lo: usize,
    hi: usize,
    policy: PivotPolicy,
    rng: &mut R,
) -> usize {
    let mid = lo + (hi - lo) / 2;
    match policy {
        PivotPolicy::First => lo,
        PivotPolicy::Last => hi - 1,
        PivotPolicy::Middle => mid,
        PivotPolicy::Random => rng.random_range(lo..hi),
        PivotPolicy::MedianOfThree => median_of_three(values, lo, mid, hi - 1),
    }
}

fn median_of_three(values: &[i32], a: usize, b: usize, c: usize) -> usize {
    let (x, y, z) = (values[a], values[b], values[c]);
    if (x <= y) == (y <= z) {
        b
    } else if (y <= x) == (x <= z) {
        a
    } else {
        c
    }
}
