//! LNSForge Neighborhoods
//!
//! This crate provides the fragment-selection side of Large Neighborhood
//! Search:
//! - The `Neighbor` lifecycle trait driven by an enclosing search loop
//! - `IntNeighbor`, which owns the recorded values and freezes variables
//! - `FragmentPolicy`, the extension point choosing what to freeze
//! - The random grouped-by-value policy and its relaxation schedule
//! - Configuration wiring (builder module)

pub mod builder;
pub mod neighbor;

pub use builder::NeighborBuilder;
pub use neighbor::{
    select_group, FixOutcome, FragmentPolicy, IntNeighbor, Neighbor, RandomGroupedByValue,
    RandomGroupedByValueNeighborhood, RelaxSchedule, ValueGroups,
};
