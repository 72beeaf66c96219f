//! Insertion sort trace generator.
//!
//! The element being inserted carries the `Pivot` tag while larger sorted
//! elements shift right one slot at a time; every shift is its own step.
//! Shifts are realized as adjacent swaps so the value multiset is intact in
//! every snapshot (the pivot rides along instead of being buffered).

use crate::util::{record, tag_range, trivial_sort_trace};
use stepviz_core::{annotate, ArrayTrace, CellState, StepMeta};

/// Generate the insertion-sort trace for `values`.
#[must_use]
pub fn insertion_sort(values: &[i64]) -> ArrayTrace {
    let mut arr = annotate(values);
    let n = arr.len();

    if n <= 1 {
        return trivial_sort_trace(&mut arr);
    }

    let mut steps = ArrayTrace::new();
    record(&mut steps, &arr, StepMeta::describe("Initial array"));

    arr[0].state = CellState::Sorted;
    record(
        &mut steps,
        &arr,
        StepMeta::describe("First element is already sorted").with_indices(vec![0]),
    );

    for i in 1..n {
        let pivot_value = arr[i].value;
        arr[i].state = CellState::Pivot;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!(
                "Inserting element {pivot_value} into the sorted portion"
            ))
            .with_indices(vec![i]),
        );

        // `hole` tracks where the pivot currently sits while it bubbles left.
        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            arr[j].state = CellState::Compared;
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!(
                    "Comparing {pivot_value} with {}",
                    arr[j].value
                ))
                .with_indices(vec![hole, j]),
            );

            if arr[j].value > pivot_value {
                arr[j].state = CellState::Swapped;
                arr.swap(j, hole);
                record(
                    &mut steps,
                    &arr,
                    StepMeta::describe(format!(
                        "Moving {} one position to the right",
                        arr[hole].value
                    ))
                    .with_indices(vec![j, hole]),
                );
                hole = j;
            } else {
                arr[j].state = CellState::Sorted;
                break;
            }
        }

        arr[hole].state = CellState::Sorted;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!("Placed {pivot_value} at position {hole}"))
                .with_indices(vec![hole]),
        );

        tag_range(&mut arr, 0, i, CellState::Sorted);
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!("Elements up to index {i} are now sorted"))
                .with_indices((0..=i).collect()),
        );
    }

    record(
        &mut steps,
        &arr,
        StepMeta::describe("Array sorted successfully").with_indices(vec![]),
    );

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_step_is_sorted() {
        let steps = insertion_sort(&[4, 1, 3, 2]);
        let last = steps.last().unwrap();
        let values: Vec<i64> = last.payload.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert!(last.payload.iter().all(|e| e.state == CellState::Sorted));
    }

    #[test]
    fn every_shift_is_its_own_step() {
        // Inserting 1 into [2,3,4] shifts three times.
        let steps = insertion_sort(&[2, 3, 4, 1]);
        let shifts = steps
            .iter()
            .filter(|s| s.meta.description.starts_with("Moving"))
            .count();
        assert_eq!(shifts, 3);
    }

    #[test]
    fn multiset_is_preserved_during_shifts() {
        let mut expected = vec![5, 1, 4, 2];
        expected.sort_unstable();
        for step in insertion_sort(&[5, 1, 4, 2]) {
            let mut got: Vec<i64> = step.payload.iter().map(|e| e.value).collect();
            got.sort_unstable();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn stable_for_duplicate_values() {
        let steps = insertion_sort(&[2, 2, 1]);
        let last = steps.last().unwrap();
        let values: Vec<i64> = last.payload.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 2]);
    }
}
