//! Shared test fixtures for LNSForge crates.
//!
//! This crate provides an in-memory integer model standing in for a solver:
//!
//! - [`model`] - Trailed integer domains with pruning and failure injection
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! lnsforge-test = { workspace = true }
//! ```
//!
//! Then build a model:
//!
//! ```
//! use lnsforge_test::IntModel;
//!
//! let (model, vars) = IntModel::with_bounds(4, 0, 3);
//! assert_eq!(vars.len(), 4);
//! assert_eq!(model.domain_size(vars[0]), 4);
//! ```

pub mod model;

pub use model::IntModel;
