//! Neighbor and fragment policy traits.

use std::fmt::Debug;

use lnsforge_core::{Contradiction, IntVariables, Result, Solution};
use rand::Rng;
use smallvec::SmallVec;

/// What a single fixing cycle did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOutcome {
    /// Drawn group keys, in draw order.
    pub drawn: SmallVec<[i32; 8]>,
    /// Positions (into the neighbor's variable list) that were frozen.
    pub frozen: Vec<usize>,
}

impl FixOutcome {
    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }
}

/// Lifecycle of an LNS neighborhood, as seen by the enclosing search loop.
///
/// The loop calls [`record_solution`](Neighbor::record_solution) or
/// [`load_from_solution`](Neighbor::load_from_solution) whenever a solution is
/// accepted, then [`fix_some_variables`](Neighbor::fix_some_variables) once per
/// relaxation step before resuming search. A contradiction from fixing means
/// the step is infeasible: the loop backtracks and retries or gives up.
pub trait Neighbor {
    /// Called once before the first solution is recorded.
    fn init<M: IntVariables + ?Sized>(&mut self, _model: &M) {}

    /// Records the current (complete) assignment of the model.
    ///
    /// # Errors
    /// Fails if a variable is not instantiated or holds a value outside the
    /// range fixed at construction. The previous snapshot is kept in that case.
    fn record_solution<M: IntVariables + ?Sized>(&mut self, model: &M) -> Result<()>;

    /// Records an assignment loaded from an external solution.
    fn load_from_solution<S: Solution + ?Sized>(&mut self, solution: &S) -> Result<()>;

    /// Freezes part of the recorded solution in `model`.
    fn fix_some_variables<M: IntVariables + ?Sized>(
        &mut self,
        model: &mut M,
    ) -> std::result::Result<FixOutcome, Contradiction>;

    /// Relaxes the neighborhood, freeing more (or different) variables.
    fn restrict_less(&mut self);

    /// Whether the neighborhood has nothing left to explore.
    fn is_search_complete(&self) -> bool {
        false
    }
}

/// Chooses which recorded positions a fixing cycle freezes.
///
/// Policies never touch the model: freezing goes through the callback handed
/// to [`select_and_freeze`](FragmentPolicy::select_and_freeze), which returns
/// whether the position was frozen or skipped.
pub trait FragmentPolicy: Send + Debug {
    /// Inclusive range of the values the policy can index.
    ///
    /// Snapshots holding a value outside it are rejected by the neighbor.
    fn value_bounds(&self) -> (i32, i32);

    /// Rebuilds policy state from a new snapshot, one value per position.
    fn on_snapshot(&mut self, values: &[i32]);

    /// Counts a new fixing cycle and returns how many groups it should fix.
    fn compute_target<R: Rng>(&mut self, rng: &mut R) -> usize;

    /// Relaxes the target without counting a cycle.
    fn relax<R: Rng>(&mut self, rng: &mut R);

    /// Draws up to `target` groups and freezes their members.
    fn select_and_freeze<R, F>(
        &mut self,
        target: usize,
        rng: &mut R,
        freeze: F,
    ) -> std::result::Result<FixOutcome, Contradiction>
    where
        R: Rng,
        F: FnMut(usize) -> std::result::Result<bool, Contradiction>;
}
