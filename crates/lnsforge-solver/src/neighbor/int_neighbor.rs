//! Integer-variable neighbor driving a fragment policy.

use lnsforge_core::{Contradiction, IntVariables, LnsForgeError, Result, Solution, VarId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::traits::{FixOutcome, FragmentPolicy, Neighbor};

/// A neighbor over integer variables.
///
/// Keeps the variable ids and their values in the last snapshot, and freezes
/// the positions chosen by its policy. The random stream is private to the
/// instance: the same seed and the same call sequence give the same fragments.
#[derive(Debug, Clone)]
pub struct IntNeighbor<P> {
    vars: Vec<VarId>,
    /// Values of `vars` in the last snapshot; empty before the first one.
    values: Vec<i32>,
    min_val: i32,
    max_val: i32,
    rng: ChaCha8Rng,
    policy: P,
}

impl<P: FragmentPolicy> IntNeighbor<P> {
    /// Wraps `policy` for `vars`.
    ///
    /// Recorded values must stay within [`FragmentPolicy::value_bounds`].
    ///
    /// # Errors
    /// Returns [`LnsForgeError::Config`] if `vars` is empty.
    pub fn with_policy(vars: &[VarId], policy: P, seed: u64) -> Result<Self> {
        if vars.is_empty() {
            return Err(LnsForgeError::Config(
                "neighbor needs at least one variable".into(),
            ));
        }
        let (min_val, max_val) = policy.value_bounds();
        Ok(Self {
            vars: vars.to_vec(),
            values: Vec::new(),
            min_val,
            max_val,
            rng: ChaCha8Rng::seed_from_u64(seed),
            policy,
        })
    }
}

impl<P> IntNeighbor<P> {
    /// Union of the current domains of `vars`: smallest lower bound, largest
    /// upper bound.
    pub fn value_range<M: IntVariables + ?Sized>(
        model: &M,
        vars: &[VarId],
    ) -> Result<(i32, i32)> {
        let min = vars.iter().map(|&v| model.lower_bound(v)).min();
        let max = vars.iter().map(|&v| model.upper_bound(v)).max();
        match (min, max) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(LnsForgeError::Config(
                "neighbor needs at least one variable".into(),
            )),
        }
    }

    pub fn vars(&self) -> &[VarId] {
        &self.vars
    }

    /// Values of the last snapshot, one per variable.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn value_bounds(&self) -> (i32, i32) {
        (self.min_val, self.max_val)
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn check_range(&self, var: VarId, value: i32) -> Result<i32> {
        if value < self.min_val || value > self.max_val {
            return Err(LnsForgeError::ValueOutOfRange {
                var,
                value,
                min: self.min_val,
                max: self.max_val,
            });
        }
        Ok(value)
    }
}

impl<P: FragmentPolicy> IntNeighbor<P> {
    /// Replaces the snapshot and lets the policy rebuild.
    fn take_snapshot(&mut self, values: Vec<i32>) {
        self.values = values;
        self.policy.on_snapshot(&self.values);
    }
}

impl<P: FragmentPolicy> Neighbor for IntNeighbor<P> {
    fn record_solution<M: IntVariables + ?Sized>(&mut self, model: &M) -> Result<()> {
        let values = self
            .vars
            .iter()
            .map(|&var| {
                let value = model.value(var).ok_or(LnsForgeError::Uninstantiated(var))?;
                self.check_range(var, value)
            })
            .collect::<Result<Vec<_>>>()?;
        self.take_snapshot(values);
        Ok(())
    }

    fn load_from_solution<S: Solution + ?Sized>(&mut self, solution: &S) -> Result<()> {
        let values = self
            .vars
            .iter()
            .map(|&var| {
                let value = solution
                    .int_val(var)
                    .ok_or(LnsForgeError::MissingValue(var))?;
                self.check_range(var, value)
            })
            .collect::<Result<Vec<_>>>()?;
        self.take_snapshot(values);
        Ok(())
    }

    fn fix_some_variables<M: IntVariables + ?Sized>(
        &mut self,
        model: &mut M,
    ) -> std::result::Result<FixOutcome, Contradiction> {
        let target = self.policy.compute_target(&mut self.rng);
        let vars = &self.vars;
        let values = &self.values;
        let result = self
            .policy
            .select_and_freeze(target, &mut self.rng, |pos| {
                let (var, value) = (vars[pos], values[pos]);
                // Auxiliary variables may already have lost their recorded value.
                if !model.contains(var, value) {
                    return Ok(false);
                }
                model.instantiate_to(var, value)?;
                Ok(true)
            });
        if let Err(contradiction) = &result {
            debug!(
                event = "fix_failed",
                var = %contradiction.var,
                value = contradiction.value,
            );
        }
        result
    }

    fn restrict_less(&mut self) {
        self.policy.relax(&mut self.rng);
    }
}
