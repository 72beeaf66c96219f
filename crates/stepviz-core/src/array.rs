//! Array-family payload: a value plus its role in the current step.
//!
//! The sorting and searching generators never invent or drop values — the
//! multiset of `value`s in every step equals the multiset of the original
//! input; only positions and tags change.

use serde::{Deserialize, Serialize};

/// Role of an array slot within one step.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// Not currently under discussion.
    #[default]
    Default,
    /// The element being examined (search cursor, binary-search midpoint).
    Current,
    /// One side of an active comparison.
    Compared,
    /// About to be (or just) exchanged/shifted.
    Swapped,
    /// Pivot / element being inserted / right merge half.
    Pivot,
    /// In its final position.
    Sorted,
    /// Inside the active binary-search window.
    Range,
    /// Discarded half of a binary-search window.
    Eliminated,
    /// Scanned and rejected by linear search.
    Checked,
    /// The search target, located.
    Found,
}

/// One array slot: the value it holds and its current role.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    /// The value occupying this slot.
    pub value: i64,
    /// Role tag for the current step.
    pub state: CellState,
}

impl Element {
    /// A slot holding `value`, tagged `Default`.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value, state: CellState::Default }
    }

    /// Copy of this slot with a different tag.
    #[inline]
    #[must_use]
    pub const fn tagged(self, state: CellState) -> Self {
        Self { value: self.value, state }
    }
}

/// Annotate a plain value slice as all-`Default` elements.
#[must_use]
pub fn annotate(values: &[i64]) -> Vec<Element> {
    values.iter().copied().map(Element::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_preserves_values_in_order() {
        let elems = annotate(&[3, 1, 2]);
        assert_eq!(elems.len(), 3);
        assert_eq!(elems[0].value, 3);
        assert!(elems.iter().all(|e| e.state == CellState::Default));
    }

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_string(&CellState::Eliminated).unwrap();
        assert_eq!(json, r#""eliminated""#);
    }
}
