//! Relaxation schedule for the number of fixed groups.

use rand::Rng;
use tracing::debug;

/// Tracks fixing cycles and resamples the fragment size.
///
/// On a new snapshot the target is `prop_fix_values * used_values + 1`, which
/// the first cycle uses as is. From then on, once more than `limit` cycles
/// have run, the target is redrawn uniformly in `[0, used_values)` and the
/// next resample is pushed `level` cycles further. The redraw is not
/// monotonic: the new target can be smaller than the previous one.
#[derive(Debug, Clone)]
pub struct RelaxSchedule {
    prop_fix_values: f64,
    level: u32,
    nb_call: u64,
    limit: u64,
    nb_fixed_values: f64,
    used_values: usize,
}

impl RelaxSchedule {
    pub fn new(prop_fix_values: f64, level: u32) -> Self {
        Self {
            prop_fix_values,
            level,
            nb_call: 0,
            limit: 0,
            nb_fixed_values: 0.0,
            used_values: 0,
        }
    }

    /// Restarts the schedule for a snapshot occupying `used_values` values.
    pub fn reset(&mut self, used_values: usize) {
        self.used_values = used_values;
        self.nb_call = 0;
        self.limit = 0;
        self.nb_fixed_values = self.prop_fix_values * used_values as f64 + 1.0;
    }

    /// Runs the schedule for a new fixing cycle and returns its target.
    ///
    /// The threshold is checked against the cycles completed so far, then
    /// the current cycle is counted.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.update(rng);
        self.nb_call += 1;
        self.target()
    }

    /// Resamples the target if the escalation point has been passed.
    ///
    /// Returns whether a resample happened.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.nb_call <= self.limit {
            return false;
        }
        self.limit = self.nb_call + u64::from(self.level);
        self.nb_fixed_values = rng.random::<f64>() * self.used_values as f64;
        debug!(
            event = "relax",
            nb_call = self.nb_call,
            limit = self.limit,
            nb_fixed_values = self.nb_fixed_values,
            used_values = self.used_values,
        );
        true
    }

    /// Number of groups to fix, the real-valued target truncated.
    pub fn target(&self) -> usize {
        self.nb_fixed_values as usize
    }

    pub fn nb_fixed_values(&self) -> f64 {
        self.nb_fixed_values
    }

    pub fn nb_call(&self) -> u64 {
        self.nb_call
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn used_values(&self) -> usize {
        self.used_values
    }
}
