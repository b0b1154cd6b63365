//! Domain collaborator traits
//!
//! Neighborhoods never own variable state. They talk to the solver through:
//! - `IntVariables`: bounds, membership and instantiation of integer variables
//! - `Solution`: read access to a recorded assignment
//! - `VarId`: the index identifying a variable in the model

mod solution;
mod variable;

#[cfg(test)]
mod tests;

pub use solution::{Solution, StoredSolution};
pub use variable::{IntVariables, VarId};
