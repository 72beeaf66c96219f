//! Recurrence-family payload: a short list of labeled values.
//!
//! Used by the Fibonacci table and Euclidean GCD generators. The state
//! vocabulary is shared but each algorithm uses its own subset
//! (Fibonacci: calculated/current/result; GCD: current/remainder/result).

use serde::{Deserialize, Serialize};

/// Role of a labeled value within one step.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScalarState {
    /// Carried along, not under discussion.
    #[default]
    Default,
    /// Operand of the current computation.
    Current,
    /// Already-computed table cell.
    Calculated,
    /// Freshly computed remainder (GCD only).
    Remainder,
    /// The final answer.
    Result,
}

/// One labeled value in a recurrence step.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LabeledValue {
    /// Table index, where the algorithm has one (Fibonacci).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub index: Option<usize>,
    /// The value itself.
    pub value: i64,
    /// Role tag for the current step.
    pub state: ScalarState,
    /// Per-value caption (GCD operand labels).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl LabeledValue {
    /// A table cell at `index` holding `value`.
    #[must_use]
    pub fn cell(index: usize, value: i64, state: ScalarState) -> Self {
        Self { index: Some(index), value, state, description: None }
    }

    /// An index-free value with a caption.
    #[must_use]
    pub fn captioned(value: i64, state: ScalarState, description: impl Into<String>) -> Self {
        Self { index: None, value, state, description: Some(description.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_roundtrips_through_json() {
        let v = LabeledValue::cell(3, 2, ScalarState::Calculated);
        let json = serde_json::to_string(&v).unwrap();
        let back: LabeledValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert!(!json.contains("description"));
    }
}
