//! Binary search trace generator.
//!
//! The generator defensively re-sorts its input ascending — the algorithm's
//! precondition is a sorted array and callers may pass unsorted data, so
//! normalization is part of the contract rather than an error. Each
//! iteration emits a `Range` window step, a `Current` midpoint step
//! (`mid = floor((left + right) / 2)`, so the lower index wins on
//! even-sized windows), a `Compared` step, then either a terminal `Found`
//! step or an `Eliminated` re-tag of the discarded half. Eliminated tags
//! persist across iterations.

use crate::util::record;
use stepviz_core::{annotate, ArrayTrace, CellState, SearchRange, StepMeta};

/// Generate the binary-search trace for `target` over `values`.
#[must_use]
pub fn binary_search(values: &[i64], target: i64) -> ArrayTrace {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mut arr = annotate(&sorted);
    let n = arr.len();

    let mut comparisons: u32 = 0;
    let mut steps = ArrayTrace::new();

    let mut initial = StepMeta::describe(format!(
        "Searching for {target} using Binary Search on sorted array"
    ))
    .with_indices(vec![])
    .with_target(target)
    .with_comparisons(comparisons);
    if n > 0 {
        initial = initial.with_range(SearchRange::new(0, n - 1));
    }
    record(&mut steps, &arr, initial);

    let mut left: isize = 0;
    let mut right: isize = n as isize - 1;

    while left <= right {
        let (l, r) = (left as usize, right as usize);

        for e in &mut arr[l..=r] {
            e.state = CellState::Range;
        }
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!("Current search range: indices {l} to {r}"))
                .with_indices(vec![l, r])
                .with_target(target)
                .with_comparisons(comparisons)
                .with_range(SearchRange::new(l, r)),
        );

        let mid = (l + r) / 2;

        arr[mid].state = CellState::Current;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!("Selected middle element at index {mid}"))
                .with_indices(vec![mid])
                .with_target(target)
                .with_comparisons(comparisons)
                .with_range(SearchRange::new(l, r)),
        );

        comparisons += 1;

        arr[mid].state = CellState::Compared;
        record(
            &mut steps,
            &arr,
            StepMeta::describe(format!(
                "Comparing middle element {} at index {mid} with target {target}",
                arr[mid].value
            ))
            .with_indices(vec![mid])
            .with_target(target)
            .with_comparisons(comparisons)
            .with_range(SearchRange::new(l, r)),
        );

        if arr[mid].value == target {
            arr[mid].state = CellState::Found;
            record(
                &mut steps,
                &arr,
                StepMeta::describe(format!("Found {target} at index {mid}"))
                    .with_indices(vec![mid])
                    .with_target(target)
                    .with_comparisons(comparisons)
                    .with_found(true)
                    .with_range(SearchRange::new(l, r)),
            );
            return steps;
        }

        if arr[mid].value < target {
            // Target is in the right half; drop [l, mid].
            reset_window(&mut arr);
            for e in &mut arr[l..=mid] {
                e.state = CellState::Eliminated;
            }
            let mut meta = StepMeta::describe(format!(
                "{} < {target}, searching in the right half",
                arr[mid].value
            ))
            .with_indices(vec![mid])
            .with_target(target)
            .with_comparisons(comparisons);
            if mid < r {
                meta = meta.with_range(SearchRange::new(mid + 1, r));
            }
            record(&mut steps, &arr, meta);
            left = mid as isize + 1;
        } else {
            // Target is in the left half; drop [mid, r].
            reset_window(&mut arr);
            for e in &mut arr[mid..=r] {
                e.state = CellState::Eliminated;
            }
            let mut meta = StepMeta::describe(format!(
                "{} > {target}, searching in the left half",
                arr[mid].value
            ))
            .with_indices(vec![mid])
            .with_target(target)
            .with_comparisons(comparisons);
            if mid > l {
                meta = meta.with_range(SearchRange::new(l, mid - 1));
            }
            record(&mut steps, &arr, meta);
            right = mid as isize - 1;
        }
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

/// Reset everything except persistent `Eliminated` tags.
fn reset_window(arr: &mut [stepviz_core::Element]) {
    for e in arr.iter_mut() {
        if e.state != CellState::Eliminated {
            e.state = CellState::Default;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resorts_input_and_finds_target() {
        let steps = binary_search(&[5, 3, 1], 3);
        let first = &steps[0].payload;
        let values: Vec<i64> = first.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 3, 5]);

        let last = steps.last().unwrap();
        assert_eq!(last.meta.found, Some(true));
        assert_eq!(last.payload[1].state, CellState::Found);
        assert_eq!(last.meta.indices.as_deref(), Some(&[1][..]));
    }

    #[test]
    fn midpoint_is_floor_of_average() {
        let steps = binary_search(&[1, 2, 3, 4], 1);
        // First window [0,3] selects mid 1, not 2.
        let mid_step = steps
            .iter()
            .find(|s| s.meta.description.starts_with("Selected middle"))
            .unwrap();
        assert_eq!(mid_step.meta.indices.as_deref(), Some(&[1][..]));
    }

    #[test]
    fn eliminated_tags_persist() {
        let steps = binary_search(&[1, 2, 3, 4, 5, 6, 7], 7);
        // After the first narrowing, indices 0..=3 stay eliminated in every
        // later step.
        let narrowed: Vec<_> = steps
            .iter()
            .skip_while(|s| !s.meta.description.contains("right half"))
            .collect();
        assert!(!narrowed.is_empty());
        for step in narrowed {
            for e in &step.payload[0..=3] {
                assert_eq!(e.state, CellState::Eliminated);
            }
        }
    }

    #[test]
    fn reports_not_found() {
        let steps = binary_search(&[10, 20, 30], 25);
        let last = steps.last().unwrap();
        assert_eq!(last.meta.found, Some(false));
    }

    #[test]
    fn empty_input_yields_initial_and_terminal_steps() {
        let steps = binary_search(&[], 1);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].meta.range, None);
        assert_eq!(steps.last().unwrap().meta.found, Some(false));
    }
}
