//! Fibonacci table trace generator.
//!
//! Iterative dynamic-programming build. The base cases F(0)=0, F(1)=1 form
//! the first step; every later iteration emits a "calculating" step with
//! the two predecessor cells tagged `Current`, then a "result" step
//! appending the new cell. The final step tags index `n` as `Result` and
//! everything else `Calculated`. The domain stops at index 92, the last
//! value representable in an `i64`; larger indices are treated like
//! negative ones and yield an empty trace.

use stepviz_core::{LabeledValue, ScalarState, ScalarTrace, Step, StepMeta};

/// Largest index whose Fibonacci value fits in an `i64`.
pub const MAX_INDEX: i64 = 92;

/// Generate the Fibonacci trace for `F(n)`. Indices outside `0..=92`
/// (negative, or past the last `i64`-representable value) yield an empty
/// trace.
#[must_use]
pub fn fibonacci(n: i64) -> ScalarTrace {
    if !(0..=MAX_INDEX).contains(&n) {
        return Vec::new();
    }
    let n = n as usize;

    let mut steps = ScalarTrace::new();

    steps.push(Step::new(
        vec![
            LabeledValue::cell(0, 0, ScalarState::Calculated),
            LabeledValue::cell(1, 1, ScalarState::Calculated),
        ],
        StepMeta::describe("Starting with the base cases: F(0) = 0 and F(1) = 1"),
    ));

    if n <= 1 {
        let payload = vec![
            LabeledValue::cell(0, 0, state_for(0, n)),
            LabeledValue::cell(1, 1, state_for(1, n)),
        ];
        steps.push(Step::new(
            payload,
            StepMeta::describe(format!("Final result: F({n}) = {}", n as i64)),
        ));
        return steps;
    }

    let mut fib: Vec<i64> = vec![0, 1];

    for i in 2..=n {
        let calculating: Vec<LabeledValue> = fib
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                let state = if j == i - 1 || j == i - 2 {
                    ScalarState::Current
                } else {
                    ScalarState::Calculated
                };
                LabeledValue::cell(j, v, state)
            })
            .collect();
        steps.push(Step::new(
            calculating,
            StepMeta::describe(format!(
                "Calculating F({i}) = F({}) + F({}) = {} + {}",
                i - 1,
                i - 2,
                fib[i - 1],
                fib[i - 2]
            )),
        ));

        let new_value = fib[i - 1] + fib[i - 2];
        fib.push(new_value);

        let result: Vec<LabeledValue> = fib
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                let state = if j == i { ScalarState::Current } else { ScalarState::Calculated };
                LabeledValue::cell(j, v, state)
            })
            .collect();
        steps.push(Step::new(
            result,
            StepMeta::describe(format!("F({i}) = {new_value}")),
        ));
    }

    let final_payload: Vec<LabeledValue> = fib
        .iter()
        .enumerate()
        .map(|(j, &v)| LabeledValue::cell(j, v, state_for(j, n)))
        .collect();
    steps.push(Step::new(
        final_payload,
        StepMeta::describe(format!("Final result: F({n}) = {}", fib[n])),
    ));

    steps
}

fn state_for(index: usize, n: usize) -> ScalarState {
    if index == n {
        ScalarState::Result
    } else {
        ScalarState::Calculated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_index_yields_empty_trace() {
        assert!(fibonacci(-1).is_empty());
        assert!(fibonacci(-1).is_empty()); // deterministically
    }

    #[test]
    fn last_representable_index_succeeds() {
        let steps = fibonacci(MAX_INDEX);
        let last = steps.last().unwrap();
        assert_eq!(last.payload.len(), 93);
        assert_eq!(last.payload[92].value, 7_540_113_804_746_346_429);
        assert_eq!(last.payload[92].state, ScalarState::Result);
    }

    #[test]
    fn indices_past_the_representable_range_yield_empty_traces() {
        assert!(fibonacci(MAX_INDEX + 1).is_empty());
        assert!(fibonacci(i64::MAX).is_empty());
    }

    #[test]
    fn base_cases_get_a_result_retag() {
        let steps = fibonacci(0);
        assert_eq!(steps.len(), 2);
        let last = &steps[1].payload;
        assert_eq!(last[0].state, ScalarState::Result);
        assert_eq!(last[1].state, ScalarState::Calculated);

        let steps = fibonacci(1);
        let last = steps.last().unwrap();
        assert_eq!(last.payload[1].state, ScalarState::Result);
    }

    #[test]
    fn fib_five_builds_the_full_table() {
        let steps = fibonacci(5);
        let last = steps.last().unwrap();
        let values: Vec<i64> = last.payload.iter().map(|v| v.value).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5]);
        for (j, cell) in last.payload.iter().enumerate() {
            assert_eq!(cell.index, Some(j));
            let expected = if j == 5 { ScalarState::Result } else { ScalarState::Calculated };
            assert_eq!(cell.state, expected);
        }
    }

    #[test]
    fn calculating_steps_tag_both_predecessors() {
        let steps = fibonacci(3);
        let calc = steps
            .iter()
            .find(|s| s.meta.description.starts_with("Calculating F(2)"))
            .unwrap();
        assert_eq!(calc.payload[0].state, ScalarState::Current);
        assert_eq!(calc.payload[1].state, ScalarState::Current);
    }
}
