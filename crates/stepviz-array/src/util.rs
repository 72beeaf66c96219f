//! Small helpers shared by the array generators.

use stepviz_core::{ArrayTrace, CellState, Element, Step, StepMeta};

/// Reset every tag to `Default`.
pub(crate) fn clear_tags(arr: &mut [Element]) {
    for e in arr.iter_mut() {
        e.state = CellState::Default;
    }
}

/// Tag the inclusive index range `[from, to]` with `state`.
pub(crate) fn tag_range(arr: &mut [Element], from: usize, to: usize, state: CellState) {
    for e in &mut arr[from..=to] {
        e.state = state;
    }
}

/// Record a deep snapshot of the working array.
pub(crate) fn record(steps: &mut ArrayTrace, arr: &[Element], meta: StepMeta) {
    steps.push(Step::new(arr.to_vec(), meta));
}

/// Two-step trace for inputs too short to enter the comparison loops.
pub(crate) fn trivial_sort_trace(arr: &mut Vec<Element>) -> ArrayTrace {
    let mut steps = ArrayTrace::new();
    record(&mut steps, arr, StepMeta::describe("Initial array"));
    for e in arr.iter_mut() {
        e.state = CellState::Sorted;
    }
    record(
        &mut steps,
        arr,
        StepMeta::describe("Array is now fully sorted").with_indices((0..arr.len()).collect()),
    );
    steps
}
