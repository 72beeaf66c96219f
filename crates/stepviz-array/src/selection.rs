//! Selection sort trace generator.
//!
//! For each position the unsorted suffix is scanned for its minimum; the
//! tentative minimum is re-tagged `Swapped` whenever it moves, and at most
//! one swap happens per outer pass. Finalized prefix positions stay
//! `Sorted` in every subsequent step.

use crate::util::{clear_tags, record, tag_range, trivial_sort_trace};
use stepviz_core::{annotate, ArrayTrace, CellState, StepMeta};

/// Generate the selection-sort trace for `values`.
#[must_use]
pub fn selection_sort(values: &[i64]) -> ArrayTrace {
    let mut arr = annotate(values);
    let n = arr.len();

    if n <= 1 {
        return trivial_sort_trace(&mut arr);
    }

    let mut steps = ArrayTrace::new();
    record(&mut steps, &arr, StepMeta::describe("Initial array"));

    for i in 0..n - 1 {
        let mut min_index = i;

        arr[i].state = CellState::Pivot;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!("Finding minimum element to place at position {i}"))
                .with_indices(vec![i]),
        );

        for j in i + 1..n {
            arr[j].state = CellState::Compared;
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!(
                    "Comparing {} with current minimum {}",
                    arr[j].value, arr[min_index].value
                ))
                .with_indices(vec![j, min_index]),
            );

            if arr[j].value < arr[min_index].value {
                if min_index != i {
                    arr[min_index].state = CellState::Default;
                }
                min_index = j;
                arr[min_index].state = CellState::Swapped;
                record(
                    &mut steps,
                    &arr,
                    StepMeta::describe(format!("New minimum found: {}", arr[min_index].value))
                        .with_indices(vec![min_index]),
                );
            } else {
                arr[j].state = CellState::Default;
            }
        }

        if min_index != i {
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!(
                    "Swapping {} and {}",
                    arr[i].value, arr[min_index].value
                ))
                .with_indices(vec![i, min_index]),
            );

            arr.swap(i, min_index);
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!(
                    "Placed {} at sorted position {i}",
                    arr[i].value
                ))
                .with_indices(vec![i]),
            );
        } else {
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!(
                    "{} is already at the correct position {i}",
                    arr[i].value
                ))
                .with_indices(vec![i]),
            );
        }

        clear_tags(&mut arr);
        tag_range(&mut arr, 0, i, CellState::Sorted);
    }

    tag_range(&mut arr, 0, n - 1, CellState::Sorted);
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
        let steps = selection_sort(&[5, 2, 4, 1, 3]);
        let last = steps.last().unwrap();
        let values: Vec<i64> = last.payload.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert!(last.payload.iter().all(|e| e.state == CellState::Sorted));
    }

    #[test]
    fn at_most_one_swap_per_pass() {
        let steps = selection_sort(&[3, 2, 1]);
        let swaps = steps
            .iter()
            .filter(|s| s.meta.description.starts_with("Swapping"))
            .count();
        assert!(swaps <= 2); // n-1 outer passes
    }

    #[test]
    fn already_placed_element_gets_a_narration_step() {
        let steps = selection_sort(&[1, 3, 2]);
        assert!(steps
            .iter()
            .any(|s| s.meta.description.contains("already at the correct position")));
    }

    #[test]
    fn sorted_prefix_persists_mid_trace() {
        let steps = selection_sort(&[4, 3, 2, 1]);
        // Any step after the second pass keeps position 0 tagged Sorted.
        let late = steps
            .iter()
            .rev()
            .find(|s| s.meta.description.starts_with("Comparing"))
            .unwrap();
        assert_eq!(late.payload[0].state, CellState::Sorted);
    }
}
