//! Integer variable references and the model-side trait.

use std::fmt;

use crate::error::Contradiction;

/// Index of a decision variable in an externally owned model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarId(pub usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<usize> for VarId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Integer-variable queries and mutators exposed by a solver model.
///
/// # Example
///
/// ```
/// use lnsforge_core::{Contradiction, IntVariables, VarId};
///
/// struct Fixed(Vec<i32>);
///
/// impl IntVariables for Fixed {
///     fn lower_bound(&self, var: VarId) -> i32 { self.0[var.index()] }
///     fn upper_bound(&self, var: VarId) -> i32 { self.0[var.index()] }
///     fn contains(&self, var: VarId, value: i32) -> bool { self.0[var.index()] == value }
///     fn instantiate_to(&mut self, var: VarId, value: i32) -> Result<(), Contradiction> {
///         if self.contains(var, value) { Ok(()) } else { Err(Contradiction::new(var, value)) }
///     }
/// }
///
/// let model = Fixed(vec![3, 7]);
/// assert_eq!(model.value(VarId(1)), Some(7));
/// assert!(model.is_instantiated(VarId(0)));
/// ```
pub trait IntVariables {
    /// Smallest value in the current domain of `var`.
    fn lower_bound(&self, var: VarId) -> i32;

    /// Largest value in the current domain of `var`.
    fn upper_bound(&self, var: VarId) -> i32;

    /// Whether `value` is still in the domain of `var`.
    fn contains(&self, var: VarId, value: i32) -> bool;

    /// Restricts the domain of `var` to exactly `value`.
    ///
    /// May trigger propagation on the model side. Returns a
    /// [`Contradiction`] if the restriction is infeasible.
    fn instantiate_to(&mut self, var: VarId, value: i32) -> Result<(), Contradiction>;

    /// Whether `var` has a singleton domain.
    fn is_instantiated(&self, var: VarId) -> bool {
        self.lower_bound(var) == self.upper_bound(var)
    }

    /// The assigned value of `var`, if instantiated.
    fn value(&self, var: VarId) -> Option<i32> {
        if self.is_instantiated(var) {
            Some(self.lower_bound(var))
        } else {
            None
        }
    }
}
