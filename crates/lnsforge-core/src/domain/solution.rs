//! Recorded solutions.

use std::collections::HashMap;

use super::variable::{IntVariables, VarId};

/// Read access to a recorded assignment.
pub trait Solution {
    /// The value recorded for `var`, or `None` if it was not stored.
    fn int_val(&self, var: VarId) -> Option<i32>;
}

/// An owned snapshot of variable values.
///
/// Stands in for the solver-side solution store when a caller wants to keep
/// an assignment around and load it into a neighborhood later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredSolution {
    values: HashMap<VarId, i32>,
}

impl StoredSolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the instantiated values of `vars` from `model`.
    ///
    /// Variables that are not instantiated are skipped.
    pub fn record<M: IntVariables + ?Sized>(model: &M, vars: &[VarId]) -> Self {
        let values = vars
            .iter()
            .filter_map(|&var| model.value(var).map(|v| (var, v)))
            .collect();
        Self { values }
    }

    /// Stores `value` for `var`, replacing any previous value.
    pub fn set(&mut self, var: VarId, value: i32) {
        self.values.insert(var, value);
    }

    pub fn with(mut self, var: VarId, value: i32) -> Self {
        self.set(var, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Solution for StoredSolution {
    fn int_val(&self, var: VarId) -> Option<i32> {
        self.values.get(&var).copied()
    }
}

impl FromIterator<(VarId, i32)> for StoredSolution {
    fn from_iter<I: IntoIterator<Item = (VarId, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
