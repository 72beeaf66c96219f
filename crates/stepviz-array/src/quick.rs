//! Quick sort trace generator (Lomuto partition).
//!
//! The pivot is always the last element of the current subrange and keeps
//! its `Pivot` tag for the partition's duration. Every comparison against
//! the pivot is one step; the final pivot-placement swap gets its own pre
//! and post steps. Recursion proceeds on `[low, p-1]` then `[p+1, high]`.

use crate::util::{clear_tags, record, tag_range, trivial_sort_trace};
use stepviz_core::{annotate, ArrayTrace, CellState, Element, StepMeta};

/// Generate the quick-sort trace for `values`.
#[must_use]
pub fn quick_sort(values: &[i64]) -> ArrayTrace {
    let mut arr = annotate(values);
    let n = arr.len();

    if n <= 1 {
        return trivial_sort_trace(&mut arr);
    }

    let mut steps = ArrayTrace::new();
    record(&mut steps, &arr, StepMeta::describe("Initial array"));

    sort_range(&mut arr, &mut steps, 0, n - 1);

    tag_range(&mut arr, 0, n - 1, CellState::Sorted);
    record(
        &mut steps,
        &arr,
        StepMeta::describe("Array sorted successfully").with_indices((0..n).collect()),
    );

    steps
}

fn sort_range(arr: &mut [Element], steps: &mut ArrayTrace, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(arr, steps, low, high);
    if p > low {
        sort_range(arr, steps, low, p - 1);
    }
    if p < high {
        sort_range(arr, steps, p + 1, high);
    }
}

fn partition(arr: &mut [Element], steps: &mut ArrayTrace, low: usize, high: usize) -> usize {
    let pivot = arr[high].value;
    // Boundary of the less-than region; `i` is one past its last element.
    let mut i = low;

    arr[high].state = CellState::Pivot;
    record(
        steps,
        arr,
        StepMeta::describe(format!("Pivot selected: {pivot}")).with_indices(vec![high]),
    );

    for j in low..high {
        arr[j].state = CellState::Compared;
        record(
            steps,
            arr,
            StepMeta::describe(format!(
                "Comparing {} with pivot {pivot}",
                arr[j].value
            ))
            .with_indices(vec![j, high]),
        );

        if arr[j].value < pivot {
            arr[i].state = CellState::Swapped;
            arr[j].state = CellState::Swapped;
            record(
                steps,
                arr,
                StepMeta::describe(format!(
                    "Swapping {} and {}",
                    arr[i].value, arr[j].value
                ))
                .with_indices(vec![i, j]),
            );

            arr.swap(i, j);
            record(
                steps,
                arr,
                StepMeta::describe(format!(
                    "Swapped {} and {}",
                    arr[i].value, arr[j].value
                ))
                .with_indices(vec![i, j]),
            );
            i += 1;
        }

        clear_tags(arr);
        arr[high].state = CellState::Pivot;
    }

    arr[i].state = CellState::Swapped;
    arr[high].state = CellState::Swapped;
    record(
        steps,
        arr,
        StepMeta::describe("Moving pivot to its correct position").with_indices(vec![i, high]),
    );

    arr.swap(i, high);
    record(
        steps,
        arr,
        StepMeta::describe(format!("Pivot {pivot} placed at correct position"))
            .with_indices(vec![i]),
    );

    clear_tags(arr);
    i
}
