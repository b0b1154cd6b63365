//! Builder module for constructing neighborhoods from configuration
//!
//! This module provides the wiring between configuration types and
//! the neighborhood implementations.

use lnsforge_config::{LnsConfig, NeighborConfig};
use lnsforge_core::{IntVariables, LnsForgeError, Result, VarId};
use rand::Rng;

use crate::neighbor::RandomGroupedByValueNeighborhood;

/// Builder for constructing neighborhoods from configuration.
pub struct NeighborBuilder;

impl NeighborBuilder {
    /// Builds a neighborhood over `vars` from configuration.
    ///
    /// Without a configured seed, a fresh one is drawn from the thread RNG and
    /// the resulting fragments are not reproducible.
    pub fn build<M: IntVariables + ?Sized>(
        config: &LnsConfig,
        model: &M,
        vars: &[VarId],
    ) -> Result<RandomGroupedByValueNeighborhood> {
        config
            .validate()
            .map_err(|e| LnsForgeError::Config(e.to_string()))?;
        let seed = config.random_seed.unwrap_or_else(|| rand::rng().random());

        match &config.neighbor {
            NeighborConfig::RandomGroupedByValue(grouped) => {
                tracing::info!(
                    event = "neighbor_build",
                    neighbor = "random_grouped_by_value",
                    variables = vars.len(),
                    prop_fix_values = grouped.prop_fix_values,
                    level = grouped.level,
                    seed,
                );
                RandomGroupedByValueNeighborhood::new(
                    model,
                    vars,
                    grouped.prop_fix_values,
                    grouped.level,
                    seed,
                )
            }
        }
    }

    /// Creates a grouped-by-value neighborhood with explicit parameters.
    pub fn random_grouped_by_value<M: IntVariables + ?Sized>(
        model: &M,
        vars: &[VarId],
        prop_fix_values: f64,
        level: u32,
        seed: u64,
    ) -> Result<RandomGroupedByValueNeighborhood> {
        RandomGroupedByValueNeighborhood::new(model, vars, prop_fix_values, level, seed)
    }
}
