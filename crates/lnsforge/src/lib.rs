//! LNSForge - Large neighborhood search fragments for constraint solvers
//!
//! Hand a neighborhood your model's decision variables, record each solution
//! the solver accepts, and call `fix_some_variables` before every relaxation
//! step.
//!
//! # Example
//!
//! ```rust
//! use lnsforge::prelude::*;
//! use lnsforge_test::IntModel;
//!
//! let (mut model, vars) = IntModel::with_bounds(6, 0, 2);
//! let config = LnsConfig::new().with_random_seed(42);
//! let mut neighbor = NeighborBuilder::build(&config, &model, &vars).unwrap();
//!
//! model.save();
//! model.assign(&vars, &[0, 0, 1, 1, 2, 2]);
//! neighbor.record_solution(&model).unwrap();
//! model.restore();
//!
//! let outcome = neighbor.fix_some_variables(&mut model).unwrap();
//! assert!(!outcome.frozen.is_empty());
//! ```

pub mod console;

pub use lnsforge_config::{ConfigError, LnsConfig, NeighborConfig, RandomGroupedByValueConfig};
pub use lnsforge_core::{
    Contradiction, FragmentSet, IntVariables, LnsForgeError, Solution, StoredSolution,
    ValueBitSet, VarId,
};
pub use lnsforge_solver::{
    FixOutcome, FragmentPolicy, IntNeighbor, Neighbor, NeighborBuilder, RandomGroupedByValue,
    RandomGroupedByValueNeighborhood,
};

pub mod prelude {
    pub use lnsforge_config::{LnsConfig, NeighborConfig, RandomGroupedByValueConfig};
    pub use lnsforge_core::{Contradiction, IntVariables, LnsForgeError, Solution, VarId};
    pub use lnsforge_solver::{
        FixOutcome, Neighbor, NeighborBuilder, RandomGroupedByValueNeighborhood,
    };
}
