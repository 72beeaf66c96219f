//! The atomic unit of a trace: a payload snapshot plus narration metadata.
//!
//! `Step` is generic over the payload family so the sorting, graph, and
//! recurrence generators share one envelope. Metadata fields beyond
//! `description` are generator-specific and optional; `None` means
//! "not applicable", never "zero".

use serde::{Deserialize, Serialize};

/// A finished, ordered sequence of steps. Length ≥ 1 for accepted input;
/// length 0 is the defined result for domain-invalid input.
pub type Trace<P> = Vec<Step<P>>;

/// One snapshot of an algorithm's working state.
///
/// Steps are deep, independent copies: a generator never hands out a
/// reference into its transient working structure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Step<P> {
    /// The snapshot itself (elements, graph, or labeled values).
    pub payload: P,
    /// Human-readable narration and optional per-step counters.
    pub meta: StepMeta,
}

impl<P> Step<P> {
    /// Build a step from a payload and finished metadata.
    #[inline]
    #[must_use]
    pub fn new(payload: P, meta: StepMeta) -> Self {
        Self { payload, meta }
    }
}

/// Inclusive active window of a binary search, `[left, right]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRange {
    /// Left (minimum) index of the window.
    pub left: usize,
    /// Right (maximum) index of the window.
    pub right: usize,
}

impl SearchRange {
    /// Construct a window (no validation).
    #[inline]
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// Step annotations. Only `description` is always present.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StepMeta {
    /// Human-readable narration for this step.
    pub description: String,
    /// Positions under discussion (array indices or node ids).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub indices: Option<Vec<usize>>,
    /// Search target (search generators only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<i64>,
    /// Running count of value-vs-target tests (search generators only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comparisons: Option<u32>,
    /// Whether the target was located (search terminal steps only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub found: Option<bool>,
    /// Active search window (binary search only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub range: Option<SearchRange>,
}

impl StepMeta {
    /// Metadata carrying only a narration.
    #[must_use]
    pub fn describe(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            indices: None,
            target: None,
            comparisons: None,
            found: None,
            range: None,
        }
    }

    /// Attach the indices under discussion.
    #[must_use]
    pub fn with_indices(mut self, indices: Vec<usize>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Attach the search target.
    #[must_use]
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach the running comparison counter.
    #[must_use]
    pub fn with_comparisons(mut self, comparisons: u32) -> Self {
        self.comparisons = Some(comparisons);
        self
    }

    /// Attach the found/not-found verdict.
    #[must_use]
    pub fn with_found(mut self, found: bool) -> Self {
        self.found = Some(found);
        self
    }

    /// Attach the active search window.
    #[must_use]
    pub fn with_range(mut self, range: SearchRange) -> Self {
        self.range = Some(range);
        self
    }
}
