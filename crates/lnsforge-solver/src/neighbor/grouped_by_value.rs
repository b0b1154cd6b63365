//! Random grouped-by-value fragment policy.
//!
//! Variables recorded with the same value form a group. Each fixing cycle
//! draws a random subset of the non-empty groups and freezes every member of
//! each drawn group, so variables sharing a value are kept or released
//! together. Groups are drawn with equal probability whatever their size.

use lnsforge_core::{
    Contradiction, FragmentSet, IntVariables, LnsForgeError, Result, ValueBitSet, VarId,
};
use rand::Rng;
use tracing::{debug, trace};

use super::grouping::ValueGroups;
use super::int_neighbor::IntNeighbor;
use super::schedule::RelaxSchedule;
use super::selector::select_group;
use super::traits::{FixOutcome, FragmentPolicy};

/// Neighborhood freezing whole value groups of the last solution.
pub type RandomGroupedByValueNeighborhood = IntNeighbor<RandomGroupedByValue>;

/// Fragment policy drawing value groups at random.
#[derive(Debug, Clone)]
pub struct RandomGroupedByValue {
    groups: ValueGroups,
    schedule: RelaxSchedule,
    /// Groups still eligible in the current cycle.
    fragment: ValueBitSet,
}

impl RandomGroupedByValue {
    /// Creates the policy for values in `[min_val, max_val]`.
    ///
    /// # Errors
    /// Returns [`LnsForgeError::Config`] if the range is empty,
    /// `prop_fix_values` is outside `(0, 1]` or `level` is zero.
    pub fn new(min_val: i32, max_val: i32, prop_fix_values: f64, level: u32) -> Result<Self> {
        if max_val < min_val {
            return Err(LnsForgeError::Config(format!(
                "empty value range [{min_val}, {max_val}]"
            )));
        }
        if !(prop_fix_values > 0.0 && prop_fix_values <= 1.0) {
            return Err(LnsForgeError::Config(format!(
                "prop_fix_values must be in (0, 1], got {prop_fix_values}"
            )));
        }
        if level == 0 {
            return Err(LnsForgeError::Config("level must be positive".into()));
        }
        let groups = ValueGroups::new(min_val, max_val);
        let fragment = ValueBitSet::new(groups.range_len());
        Ok(Self {
            groups,
            schedule: RelaxSchedule::new(prop_fix_values, level),
            fragment,
        })
    }

    pub fn groups(&self) -> &ValueGroups {
        &self.groups
    }

    pub fn schedule(&self) -> &RelaxSchedule {
        &self.schedule
    }

    /// Read-only view of the groups still eligible in the running cycle.
    ///
    /// Empty between cycles.
    pub fn fragment(&self) -> &ValueBitSet {
        &self.fragment
    }

    /// Marks every non-empty group as eligible.
    fn mark_occupied(&mut self) {
        for &id in self.groups.occupied() {
            self.fragment.mark_range(id, id + 1);
        }
    }

    /// Unmarks the groups [`mark_occupied`](Self::mark_occupied) marked.
    fn clear_occupied(&mut self) {
        for &id in self.groups.occupied() {
            self.fragment.clear_bit(id);
        }
    }

    fn draw_and_freeze<R, F>(
        &mut self,
        target: usize,
        rng: &mut R,
        mut freeze: F,
    ) -> std::result::Result<FixOutcome, Contradiction>
    where
        R: Rng,
        F: FnMut(usize) -> std::result::Result<bool, Contradiction>,
    {
        let mut outcome = FixOutcome::default();
        for _ in 0..target {
            let Some(id) = select_group(&self.fragment, rng) else {
                break;
            };
            let value = self.groups.value_of(id);
            trace!(event = "draw", value, members = self.groups.members(id).len());
            for &pos in self.groups.members(id) {
                if freeze(pos)? {
                    outcome.frozen.push(pos);
                }
            }
            self.fragment.clear_bit(id);
            outcome.drawn.push(value);
        }
        Ok(outcome)
    }
}

impl FragmentPolicy for RandomGroupedByValue {
    fn value_bounds(&self) -> (i32, i32) {
        (self.groups.min_val(), self.groups.max_val())
    }

    fn on_snapshot(&mut self, values: &[i32]) {
        self.groups.rebuild(values);
        self.schedule.reset(self.groups.used_values());
        debug!(
            event = "snapshot",
            variables = values.len(),
            used_values = self.groups.used_values(),
            nb_fixed_values = self.schedule.nb_fixed_values(),
        );
    }

    fn compute_target<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.schedule.tick(rng)
    }

    fn relax<R: Rng>(&mut self, rng: &mut R) {
        self.schedule.update(rng);
    }

    fn select_and_freeze<R, F>(
        &mut self,
        target: usize,
        rng: &mut R,
        freeze: F,
    ) -> std::result::Result<FixOutcome, Contradiction>
    where
        R: Rng,
        F: FnMut(usize) -> std::result::Result<bool, Contradiction>,
    {
        self.mark_occupied();
        let result = self.draw_and_freeze(target, rng, freeze);
        self.clear_occupied();

        let outcome = result?;
        debug!(
            event = "fix",
            target,
            drawn = outcome.drawn.len(),
            frozen = outcome.frozen.len(),
        );
        Ok(outcome)
    }
}

impl IntNeighbor<RandomGroupedByValue> {
    /// Creates a random grouped-by-value neighborhood over `vars`.
    ///
    /// The value range is the union of the variables' current bounds in
    /// `model` and stays fixed for the lifetime of the neighborhood.
    ///
    /// # Arguments
    /// * `prop_fix_values` - Proportion of used values to fix, in (0, 1]
    /// * `level` - Fixing cycles between two resamples of the fragment size
    /// * `seed` - Seed of the private random stream
    ///
    /// # Example
    ///
    /// ```
    /// use lnsforge_core::IntVariables;
    /// use lnsforge_solver::{Neighbor, RandomGroupedByValueNeighborhood};
    /// use lnsforge_test::IntModel;
    ///
    /// let (mut model, vars) = IntModel::with_bounds(4, 0, 3);
    /// let mut neighbor = RandomGroupedByValueNeighborhood::new(&model, &vars, 0.5, 2, 42).unwrap();
    ///
    /// model.assign(&vars, &[1, 1, 2, 3]);
    /// neighbor.record_solution(&model).unwrap();
    ///
    /// let (mut model, vars) = IntModel::with_bounds(4, 0, 3);
    /// let outcome = neighbor.fix_some_variables(&mut model).unwrap();
    /// assert_eq!(outcome.drawn.len(), 2);
    /// for &pos in &outcome.frozen {
    ///     assert!(model.is_instantiated(vars[pos]));
    /// }
    /// ```
    pub fn new<M: IntVariables + ?Sized>(
        model: &M,
        vars: &[VarId],
        prop_fix_values: f64,
        level: u32,
        seed: u64,
    ) -> Result<Self> {
        let (min_val, max_val) = Self::value_range(model, vars)?;
        let policy = RandomGroupedByValue::new(min_val, max_val, prop_fix_values, level)?;
        Self::with_policy(vars, policy, seed)
    }
}
