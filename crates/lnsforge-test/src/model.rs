//! In-memory integer model.
//!
//! Domains are explicit value sets. `save`/`restore` give the caller the
//! backtracking an LNS loop needs to undo a fixing cycle, and
//! [`IntModel::fail_on`] makes chosen variables reject instantiation so
//! contradiction paths can be exercised.

use std::collections::{BTreeSet, HashSet};

use lnsforge_core::{Contradiction, IntVariables, VarId};

/// An integer model with explicit domains and a copy-based trail.
#[derive(Debug, Clone, Default)]
pub struct IntModel {
    domains: Vec<BTreeSet<i32>>,
    trail: Vec<Vec<BTreeSet<i32>>>,
    failing: HashSet<VarId>,
    instantiations: Vec<(VarId, i32)>,
}

impl IntModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `n` variables with domain `[lb, ub]`.
    pub fn with_bounds(n: usize, lb: i32, ub: i32) -> (Self, Vec<VarId>) {
        let mut model = Self::new();
        let vars = (0..n).map(|_| model.new_var(lb, ub)).collect();
        (model, vars)
    }

    /// Adds a variable with domain `[lb, ub]`.
    pub fn new_var(&mut self, lb: i32, ub: i32) -> VarId {
        self.domains.push((lb..=ub).collect());
        VarId(self.domains.len() - 1)
    }

    /// Instantiates `vars[i]` to `values[i]`, as a solver would on a solution.
    ///
    /// # Panics
    /// Panics if a value is outside its variable's domain.
    pub fn assign(&mut self, vars: &[VarId], values: &[i32]) {
        assert_eq!(vars.len(), values.len(), "one value per variable");
        for (&var, &value) in vars.iter().zip(values) {
            assert!(self.contains(var, value), "{var} cannot take {value}");
            self.domains[var.index()] = BTreeSet::from([value]);
        }
    }

    /// Removes `value` from the domain of `var`.
    pub fn remove(&mut self, var: VarId, value: i32) {
        self.domains[var.index()].remove(&value);
    }

    /// Makes every later instantiation of `var` fail.
    pub fn fail_on(&mut self, var: VarId) {
        self.failing.insert(var);
    }

    /// Pushes a checkpoint of every domain.
    pub fn save(&mut self) {
        self.trail.push(self.domains.clone());
    }

    /// Restores the domains of the most recent checkpoint.
    ///
    /// Returns `false` if there was no checkpoint.
    pub fn restore(&mut self) -> bool {
        match self.trail.pop() {
            Some(domains) => {
                self.domains = domains;
                true
            }
            None => false,
        }
    }

    pub fn domain_size(&self, var: VarId) -> usize {
        self.domains[var.index()].len()
    }

    /// Successful instantiations in call order.
    pub fn instantiations(&self) -> &[(VarId, i32)] {
        &self.instantiations
    }

    pub fn clear_instantiations(&mut self) {
        self.instantiations.clear();
    }
}

impl IntVariables for IntModel {
    fn lower_bound(&self, var: VarId) -> i32 {
        self.domains[var.index()].first().copied().unwrap_or(i32::MAX)
    }

    fn upper_bound(&self, var: VarId) -> i32 {
        self.domains[var.index()].last().copied().unwrap_or(i32::MIN)
    }

    fn contains(&self, var: VarId, value: i32) -> bool {
        self.domains[var.index()].contains(&value)
    }

    fn instantiate_to(&mut self, var: VarId, value: i32) -> Result<(), Contradiction> {
        if self.failing.contains(&var) || !self.contains(var, value) {
            self.domains[var.index()].clear();
            return Err(Contradiction::new(var, value));
        }
        self.domains[var.index()] = BTreeSet::from([value]);
        self.instantiations.push((var, value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_and_membership() {
        let mut model = IntModel::new();
        let x = model.new_var(-2, 5);
        assert_eq!(model.lower_bound(x), -2);
        assert_eq!(model.upper_bound(x), 5);
        model.remove(x, -2);
        assert_eq!(model.lower_bound(x), -1);
        assert!(!model.contains(x, -2));
    }

    #[test]
    fn test_save_restore() {
        let (mut model, vars) = IntModel::with_bounds(2, 0, 3);
        model.save();
        model.instantiate_to(vars[0], 2).unwrap();
        assert_eq!(model.value(vars[0]), Some(2));

        assert!(model.restore());
        assert_eq!(model.domain_size(vars[0]), 4);
        assert!(!model.restore());
    }

    #[test]
    fn test_fail_on_empties_domain() {
        let (mut model, vars) = IntModel::with_bounds(1, 0, 3);
        model.fail_on(vars[0]);
        let err = model.instantiate_to(vars[0], 1).unwrap_err();
        assert_eq!(err, Contradiction::new(vars[0], 1));
        assert_eq!(model.domain_size(vars[0]), 0);
        assert!(model.instantiations().is_empty());
    }

    #[test]
    fn test_assign_records_no_instantiations() {
        let (mut model, vars) = IntModel::with_bounds(3, 0, 3);
        model.assign(&vars, &[1, 1, 2]);
        assert_eq!(model.value(vars[2]), Some(2));
        assert!(model.instantiations().is_empty());
    }
}
