use std::collections::BTreeMap;

use crate::render::state::{PropValue, RenderState};

/// Default tolerance for numeric property comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// How one property changed between commits.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropChange {
    /// New or changed value.
    Set(PropValue),
    /// Property no longer present; serialized as `null`.
    Removed,
}

/// Changed properties keyed by property name.
pub type RenderDiff = BTreeMap<String, PropChange>;

/// Properties of `next` that differ from `prev` beyond `eps`, plus keys that disappeared.
pub fn diff(prev: &RenderState, next: &RenderState, eps: f64) -> RenderDiff {
    let mut out = RenderDiff::new();
    for (key, value) in next.iter() {
        let changed = prev.get(key).is_none_or(|old| !old.approx_eq(value, eps));
        if changed {
            out.insert(key.to_owned(), PropChange::Set(value.clone()));
        }
    }
    for (key, _) in prev.iter() {
        if next.get(key).is_none() {
            out.insert(key.to_owned(), PropChange::Removed);
        }
    }
    out
}

/// The last committed render state.
///
/// Each commit compares against the previous one and stores the new state, so a renderer only
/// has to touch the properties that actually moved.
#[derive(Clone, Debug)]
pub struct Retained {
    state: RenderState,
    epsilon: f64,
    commits: u64,
}

impl Default for Retained {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl Retained {
    /// Empty retained state. Negative or non-finite tolerances are treated as exact comparison.
    pub fn new(epsilon: f64) -> Self {
        Self {
            state: RenderState::new(),
            epsilon: if epsilon.is_finite() { epsilon.max(0.0) } else { 0.0 },
            commits: 0,
        }
    }

    /// Diff `next` against the last commit, then keep `next`.
    pub fn commit(&mut self, next: RenderState) -> RenderDiff {
        let changes = diff(&self.state, &next, self.epsilon);
        tracing::trace!(commit = self.commits, changed = changes.len(), "render state committed");
        self.state = next;
        self.commits += 1;
        changes
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Number of commits so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/retained.rs"]
mod tests;
