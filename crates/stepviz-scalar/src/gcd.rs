//! Euclidean GCD trace generator.
//!
//! Iterates on `(x, y) = (max(a, b), min(a, b))`: each round shows the
//! current pair, the computed remainder (tagged `Remainder`), and — when
//! the loop continues — the shifted pair. Terminates when `y = 0` with a
//! single-element `Result` step holding the answer.

use stepviz_core::{LabeledValue, ScalarState, ScalarTrace, Step, StepMeta};

/// Generate the GCD trace for `(a, b)`. Non-positive operands yield an
/// empty trace.
#[must_use]
pub fn gcd(a: i64, b: i64) -> ScalarTrace {
    if a <= 0 || b <= 0 {
        return Vec::new();
    }

    let mut steps = ScalarTrace::new();

    steps.push(Step::new(
        vec![
            LabeledValue::captioned(a, ScalarState::Current, "First number"),
            LabeledValue::captioned(b, ScalarState::Current, "Second number"),
        ],
        StepMeta::describe(format!("Starting with numbers a = {a} and b = {b}")),
    ));

    let mut x = a.max(b);
    let mut y = a.min(b);

    while y != 0 {
        steps.push(Step::new(
            vec![
                LabeledValue::captioned(x, ScalarState::Current, "Current larger value"),
                LabeledValue::captioned(y, ScalarState::Current, "Current smaller value"),
            ],
            StepMeta::describe(format!("Calculate remainder of {x} ÷ {y}")),
        ));

        let remainder = x % y;

        steps.push(Step::new(
            vec![
                LabeledValue::captioned(x, ScalarState::Default, "Larger value"),
                LabeledValue::captioned(y, ScalarState::Current, "Smaller value"),
                LabeledValue::captioned(
                    remainder,
                    ScalarState::Remainder,
                    format!("Remainder of {x} ÷ {y}"),
                ),
            ],
            StepMeta::describe(format!(
                "{x} ÷ {y} = {} with remainder {remainder}",
                x / y
            )),
        ));

        x = y;
        y = remainder;

        if y != 0 {
            steps.push(Step::new(
                vec![
                    LabeledValue::captioned(x, ScalarState::Current, "New larger value"),
                    LabeledValue::captioned(y, ScalarState::Current, "New smaller value"),
                ],
                StepMeta::describe(format!("Continue with new values: {x} and {y}")),
            ));
        }
    }

    steps.push(Step::new(
        vec![LabeledValue::captioned(x, ScalarState::Result, "GCD result")],
        StepMeta::describe(format!("GCD({a}, {b}) = {x}")),
    ));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_operands_yield_empty_traces() {
        assert!(gcd(0, 5).is_empty());
        assert!(gcd(5, 0).is_empty());
        assert!(gcd(-3, 5).is_empty());
    }

    #[test]
    fn gcd_of_48_and_18_is_6() {
        let steps = gcd(48, 18);
        let last = steps.last().unwrap();
        assert_eq!(last.payload.len(), 1);
        assert_eq!(last.payload[0].value, 6);
        assert_eq!(last.payload[0].state, ScalarState::Result);
        assert_eq!(last.meta.description, "GCD(48, 18) = 6");
    }

    #[test]
    fn operand_order_does_not_matter() {
        assert_eq!(
            gcd(18, 48).last().unwrap().payload[0].value,
            gcd(48, 18).last().unwrap().payload[0].value
        );
    }

    #[test]
    fn remainder_steps_are_tagged_distinctly() {
        let steps = gcd(48, 18);
        let remainder_step = steps
            .iter()
            .find(|s| s.meta.description.contains("with remainder"))
            .unwrap();
        assert_eq!(remainder_step.payload[2].state, ScalarState::Remainder);
    }

    #[test]
    fn equal_operands_terminate_in_one_division() {
        let steps = gcd(7, 7);
        let last = steps.last().unwrap();
        assert_eq!(last.payload[0].value, 7);
    }
}
