//! Bubble sort trace generator.
//!
//! Always produces the full worst-case pass structure: outer pass `i` in
//! `0..n`, inner `j` in `0..n-i-1`, no early exit when a pass performs no
//! swaps. After each pass the last `i+1` positions are tagged `Sorted`
//! regardless of whether anything moved.

use crate::util::{clear_tags, record, tag_range, trivial_sort_trace};
use stepviz_core::{annotate, ArrayTrace, CellState, StepMeta};

/// Generate the bubble-sort trace for `values`.
#[must_use]
pub fn bubble_sort(values: &[i64]) -> ArrayTrace {
    let mut arr = annotate(values);
    let n = arr.len();

    if n <= 1 {
        return trivial_sort_trace(&mut arr);
    }

    let mut steps = ArrayTrace::new();
    record(&mut steps, &arr, StepMeta::describe("Initial array").with_indices(vec![]));

    for i in 0..n {
        for j in 0..n - i - 1 {
            clear_tags(&mut arr);
            if i > 0 {
                tag_range(&mut arr, n - i, n - 1, CellState::Sorted);
            }

            arr[j].state = CellState::Compared;
            arr[j + 1].state = CellState::Compared;
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!(
                    "Comparing elements at positions {j} ({}) and {} ({})",
                    arr[j].value,
                    j + 1,
                    arr[j + 1].value
                ))
                .with_indices(vec![j, j + 1]),
            );

            if arr[j].value > arr[j + 1].value {
                arr[j].state = CellState::Swapped;
                arr[j + 1].state = CellState::Swapped;
                record(
                    &mut steps,
                    &arr,
                    StepMeta::describe(format!(
                        "Elements at positions {j} ({}) and {} ({}) need to be swapped",
                        arr[j].value,
                        j + 1,
                        arr[j + 1].value
                    ))
                    .with_indices(vec![j, j + 1]),
                );

                arr.swap(j, j + 1);
                record(
                    &mut steps,
                    &arr,
                    StepMeta::describe(format!(
                        "Swapped elements: {} and {}",
                        arr[j].value,
                        arr[j + 1].value
                    ))
                    .with_indices(vec![j, j + 1]),
                );
            }
        }

        clear_tags(&mut arr);
        tag_range(&mut arr, n - i - 1, n - 1, CellState::Sorted);
        let plural = if i > 0 { "elements are" } else { "element is" };
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!(
                "Completed pass {}. The largest {} {plural} now sorted.",
                i + 1,
                i + 1
            ))
            .with_indices((n - i - 1..n).rev().collect()),
        );
    }

    for e in &mut arr {
        e.state = CellState::Sorted;
    }
    record(
        &mut steps,
        &arr,
        StepMeta::describe("Array is now fully sorted").with_indices((0..n).collect()),
    );

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::CellState;

    #[test]
    fn sorts_three_elements() {
        let steps = bubble_sort(&[3, 1, 2]);
        let last = steps.last().unwrap();
        let values: Vec<i64> = last.payload.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(last.payload.iter().all(|e| e.state == CellState::Sorted));
    }

    #[test]
    fn emits_pre_and_post_swap_steps() {
        let steps = bubble_sort(&[2, 1]);
        // initial, compare, pre-swap, post-swap, pass 1, pass 2, final
        let descriptions: Vec<&str> =
            steps.iter().map(|s| s.meta.description.as_str()).collect();
        assert!(descriptions[2].contains("need to be swapped"));
        assert!(descriptions[3].starts_with("Swapped elements"));
        // Pre-swap snapshot still holds the unswapped order.
        let pre = &steps[2].payload;
        assert_eq!((pre[0].value, pre[1].value), (2, 1));
        let post = &steps[3].payload;
        assert_eq!((post[0].value, post[1].value), (1, 2));
    }

    #[test]
    fn no_early_exit_on_sorted_input() {
        // A sorted input must still walk every pass.
        let a = bubble_sort(&[1, 2, 3, 4]);
        let b = bubble_sort(&[1, 2, 3, 4]);
        assert_eq!(a, b);
        let comparisons = a
            .iter()
            .filter(|s| s.meta.description.starts_with("Comparing"))
            .count();
        assert_eq!(comparisons, 6); // n*(n-1)/2 for n=4
    }

    #[test]
    fn short_inputs_short_circuit() {
        assert_eq!(bubble_sort(&[]).len(), 2);
        assert_eq!(bubble_sort(&[7]).len(), 2);
        let single = bubble_sort(&[7]);
        assert_eq!(single.last().unwrap().payload[0].state, CellState::Sorted);
    }
}
