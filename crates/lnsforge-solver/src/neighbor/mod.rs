//! LNS neighborhoods.
//!
//! A neighborhood turns the last recorded solution into a partial
//! assignment: some variables are frozen to their recorded value, the rest
//! are left for the solver to re-explore.
//!
//! The work is split in two:
//! - [`IntNeighbor`] owns the variable ids, the recorded values and a
//!   private seeded RNG, and performs the actual freezing against the model.
//! - A [`FragmentPolicy`] decides which recorded positions to freeze.
//!
//! [`RandomGroupedByValue`] is the shipped policy: variables sharing a value
//! move together, and the number of values fixed per cycle is resampled by a
//! [`RelaxSchedule`].

mod grouped_by_value;
mod grouping;
mod int_neighbor;
mod schedule;
mod selector;
mod traits;

#[cfg(test)]
mod tests;

pub use grouped_by_value::{RandomGroupedByValue, RandomGroupedByValueNeighborhood};
pub use grouping::ValueGroups;
pub use int_neighbor::IntNeighbor;
pub use schedule::RelaxSchedule;
pub use selector::select_group;
pub use traits::{FixOutcome, FragmentPolicy, Neighbor};
