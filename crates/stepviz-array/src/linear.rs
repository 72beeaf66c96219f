//! Linear search trace generator.
//!
//! Scans index 0..n in order. Each index gets a `Current` step, a
//! `Compared` step, and on mismatch a `Checked` step; rejected positions
//! stay `Checked` for the rest of the trace. On a match the `Found` step
//! terminates the trace immediately.

use crate::util::record;
use stepviz_core::{annotate, ArrayTrace, CellState, StepMeta};

/// Generate the linear-search trace for `target` over `values`.
#[must_use]
pub fn linear_search(values: &[i64], target: i64) -> ArrayTrace {
    let mut arr = annotate(values);
    let mut comparisons: u32 = 0;
    let mut steps = ArrayTrace::new();

    record(
        &mut steps,
        &arr,
        StepMeta::describe(format!("Searching for {target} using Linear Search"))
            .with_indices(vec![])
            .with_target(target)
            .with_comparisons(comparisons),
    );

    for i in 0..arr.len() {
        arr[i].state = CellState::Current;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!(
                "Checking if {} equals {target}",
                arr[i].value
            ))
            .with_indices(vec![i])
            .with_target(target)
            .with_comparisons(comparisons),
        );

        comparisons += 1;

        arr[i].state = CellState::Compared;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!("Comparing {} with {target}", arr[i].value))
                .with_indices(vec![i])
                .with_target(target)
                .with_comparisons(comparisons),
        );

        if arr[i].value == target {
            arr[i].state = CellState::Found;
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!("Found {target} at index {i}"))
                    .with_indices(vec![i])
                    .with_target(target)
                    .with_comparisons(comparisons)
                    .with_found(true),
            );
            return steps;
        }

        arr[i].state = CellState::Checked;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!(
                "{} is not equal to {target}, moving to next element",
                arr[i].value
            ))
            .with_indices(vec![i])
            .with_target(target)
            .with_comparisons(comparisons),
        );
    }

    record(
        &mut steps,
        &arr,
        StepMeta::describe(format!(
            "{target} not found in the array after {comparisons} comparisons"
        ))
        .with_indices(vec![])
        .with_target(target)
        .with_comparisons(comparisons)
        .with_found(false),
    );

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminates_immediately_on_match() {
        let steps = linear_search(&[4, 7, 7, 1], 7);
        let last = steps.last().unwrap();
        assert_eq!(last.meta.found, Some(true));
        assert_eq!(last.payload[1].state, CellState::Found);
        // Index 2 (the duplicate) and 3 were never scanned.
        assert_eq!(last.payload[2].state, CellState::Default);
        assert_eq!(last.meta.comparisons, Some(2));
    }

    #[test]
    fn reports_not_found_after_exhaustion() {
        let steps = linear_search(&[1, 2, 3], 9);
        let last = steps.last().unwrap();
        assert_eq!(last.meta.found, Some(false));
        assert_eq!(last.meta.comparisons, Some(3));
        assert!(last
            .payload
            .iter()
            .all(|e| e.state == CellState::Checked));
    }

    #[test]
    fn empty_array_yields_initial_and_terminal_steps() {
        let steps = linear_search(&[], 5);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.last().unwrap().meta.found, Some(false));
    }

    #[test]
    fn comparisons_count_value_tests_not_steps() {
        let steps = linear_search(&[8, 9], 9);
        // Each scanned index contributes exactly one comparison.
        assert_eq!(steps.last().unwrap().meta.comparisons, Some(2));
    }
}
