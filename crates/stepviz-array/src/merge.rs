//! Merge sort trace generator (top-down).
//!
//! Divide steps tag the subrange `Compared` on descent; each merge is
//! announced with the left half `Compared` and the right half `Pivot`, then
//! emits one comparison step per value test and one `Swapped` placement
//! step per element written into position, including the drain of
//! leftovers.
//!
//! Placements are realized as in-place rotations: choosing the right-half
//! element rotates it into the write position, so every snapshot holds the
//! exact input multiset. Ties (`<=`) keep the left element, making the sort
//! stable.

use crate::util::{clear_tags, record, tag_range, trivial_sort_trace};
use stepviz_core::{annotate, ArrayTrace, CellState, Element, StepMeta};

/// Generate the merge-sort trace for `values`.
#[must_use]
pub fn merge_sort(values: &[i64]) -> ArrayTrace {
    let mut arr = annotate(values);
    let n = arr.len();

    if n <= 1 {
        return trivial_sort_trace(&mut arr);
    }

    let mut steps = ArrayTrace::new();
    record(&mut steps, &arr, StepMeta::describe("Initial array"));

    sort_range(&mut arr, &mut steps, 0, n - 1);

    tag_range(&mut arr, 0, n - 1, CellState::Sorted);
    record(&mut steps, &arr, StepMeta::describe("Array sorted successfully"));

    steps
}

fn sort_range(arr: &mut [Element], steps: &mut ArrayTrace, start: usize, end: usize) {
    if start >= end {
        return;
    }

    let mid = (start + end) / 2;

    tag_range(arr, start, end, CellState::Compared);
    record(
        steps,
        arr,
        StepMeta::describe(format!("Dividing array from index {start} to {end}"))
            .with_indices(vec![start, end]),
    );
    clear_tags(arr);

    sort_range(arr, steps, start, mid);
    sort_range(arr, steps, mid + 1, end);
    merge(arr, steps, start, mid, end);
}

fn merge(arr: &mut [Element], steps: &mut ArrayTrace, start: usize, mid: usize, end: usize) {
    tag_range(arr, start, mid, CellState::Compared);
    tag_range(arr, mid + 1, end, CellState::Pivot);
    record(
        steps,
        arr,
        StepMeta::describe(format!(
            "Merging subarrays from {start}-{mid} and {}-{end}",
            mid + 1
        ))
        .with_indices(vec![start, mid, end]),
    );
    clear_tags(arr);

    // The unmerged left run always occupies [i, j); the right run [j, end].
    let mut i = start;
    let mut j = mid + 1;

    while i < j && j <= end {
        arr[i].state = CellState::Compared;
        arr[j].state = CellState::Compared;
        record(
            steps,
            arr,
            StepMeta::describe(format!(
                "Comparing {} and {}",
                arr[i].value, arr[j].value
            ))
            .with_indices(vec![i, j]),
        );

        if arr[i].value <= arr[j].value {
            arr[i].state = CellState::Swapped;
            record(
                steps,
                arr,
                StepMeta::describe(format!("Placing {} at position {i}", arr[i].value))
                    .with_indices(vec![i]),
            );
            i += 1;
        } else {
            // Rotate the right element into the write position; the left
            // run shifts one slot right and stays contiguous.
            arr[i..=j].rotate_right(1);
            arr[i].state = CellState::Swapped;
            record(
                steps,
                arr,
                StepMeta::describe(format!("Placing {} at position {i}", arr[i].value))
                    .with_indices(vec![i]),
            );
            i += 1;
            j += 1;
        }
        clear_tags(arr);
    }

    // Whatever remains is already in its final slots; narrate the drain.
    let mut k = i;
    while k <= end {
        arr[k].state = CellState::Swapped;
        record(
            steps,
            arr,
            StepMeta::describe(format!(
                "Placing remaining element {} at position {k}",
                arr[k].value
            ))
            .with_indices(vec![k]),
        );
        clear_tags(arr);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_step_is_sorted() {
        let steps = merge_sort(&[5, 2, 8, 1, 9, 3]);
        let last = steps.last().unwrap();
        let values: Vec<i64> = last.payload.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 3, 5, 8, 9]);
        assert!(last.payload.iter().all(|e| e.state == CellState::Sorted));
    }

    #[test]
    fn announces_divides_and_merges() {
        let steps = merge_sort(&[3, 1, 2]);
        assert!(steps
            .iter()
            .any(|s| s.meta.description.starts_with("Dividing array")));
        assert!(steps
            .iter()
            .any(|s| s.meta.description.starts_with("Merging subarrays")));
    }

    #[test]
    fn merge_announcement_tags_halves_differently() {
        let steps = merge_sort(&[2, 1]);
        let announce = steps
            .iter()
            .find(|s| s.meta.description.starts_with("Merging subarrays"))
            .unwrap();
        assert_eq!(announce.payload[0].state, CellState::Compared);
        assert_eq!(announce.payload[1].state, CellState::Pivot);
    }

    #[test]
    fn multiset_holds_in_every_step() {
        let input = [4, 1, 3, 9, 7];
        let mut expected: Vec<i64> = input.to_vec();
        expected.sort_unstable();
        for step in merge_sort(&input) {
            let mut got: Vec<i64> = step.payload.iter().map(|e| e.value).collect();
            got.sort_unstable();
            assert_eq!(got, expected);
        }
    }
}
