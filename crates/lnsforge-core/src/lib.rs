//! LNSForge Core - Core types and traits for large neighborhood search
//!
//! This crate provides the fundamental abstractions shared by LNSForge crates:
//! - Variable references and the integer-variable collaborator trait
//! - Solution snapshots read by neighborhoods
//! - The fragment bit-set used to draw eligible groups
//! - Error types for contradictions and invalid construction

pub mod bitset;
pub mod domain;
pub mod error;

pub use bitset::{FragmentSet, ValueBitSet};
pub use domain::{IntVariables, Solution, StoredSolution, VarId};
pub use error::{Contradiction, LnsForgeError, Result};
