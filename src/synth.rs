//! Counter synthesis — the top-level pipeline
//!
//! One configuration in, one [`CounterDesign`] out. The pipeline is pure and
//! single-pass: sequence, state table, transition table, Karnaugh maps and
//! equations are derived top-down and never mutated afterwards, so repeated
//! and concurrent invocations are safe without any synchronization.

use crate::config::CounterConfig;
use crate::config_validate::validate_config;
use crate::error::{Error, Result};
use crate::kmap::simplify::Simplify;
use crate::kmap::{self, KarnaughMap};
use crate::sequence::{self, ResetInfo};
use crate::table::{self, StateRow, TransitionRow};
use serde::Serialize;

/// A minimized equation for one excitation input, in canonical string form.
/// This pairing is the contract consumed by gate-level renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputEquation {
    /// Excitation input name, e.g. `JA`
    pub input: String,
    /// Sum-of-products expression, e.g. `B·C + A'`
    pub expression: String,
}

/// Complete synthesis result for one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterDesign {
    /// The designed visit sequence
    pub sequence: Vec<usize>,
    /// One row per visited state, in visitation order
    pub state_table: Vec<StateRow>,
    /// One row per state of the full space, ordered by state
    pub transition_table: Vec<TransitionRow>,
    /// One map per excitation input, in stage order
    pub karnaugh_maps: Vec<KarnaughMap>,
    /// Equations in the same order as the maps
    pub equations: Vec<InputEquation>,
    /// How the sequence returns to its starting point
    pub reset_info: ResetInfo,
}

impl CounterDesign {
    /// Serialize the design to JSON for downstream renderers
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Json)
    }
}

/// Synthesize a counter from a pre-validated configuration.
///
/// # Panics
///
/// Panics on configurations that violate the input contract (bit width
/// outside 2..=4, or a materialized sequence shorter than 2 states). Run
/// [`validate_config`] first, or use [`synthesize_checked`]; the contract
/// violations rejected there would otherwise surface here as index errors
/// deep in the pipeline.
pub fn synthesize(config: &CounterConfig) -> CounterDesign {
    synthesize_with(config, &kmap::simplify::GreedyGrouping)
}

/// Synthesize with an explicit simplification strategy.
pub fn synthesize_with(config: &CounterConfig, simplifier: &dyn Simplify) -> CounterDesign {
    assert!(
        (2..=4).contains(&config.bits),
        "unsupported bit width {} (supported widths are 2, 3 and 4)",
        config.bits
    );

    let sequence = sequence::materialize(config);
    assert!(
        sequence.len() >= 2,
        "counter sequence must contain at least 2 states, got {}",
        sequence.len()
    );

    let reset_info = sequence::reset_info(&sequence, config.reset_state);
    let state_table = table::state_table(&sequence, config.bits, reset_info.reset_state);
    let transition_table = table::transition_table(
        &state_table,
        config.flip_flop,
        config.bits,
        reset_info.reset_state,
    );
    let karnaugh_maps =
        kmap::build_maps_with(&transition_table, config.flip_flop, config.bits, simplifier);
    let equations = karnaugh_maps
        .iter()
        .map(|map| InputEquation {
            input: map.input_name.clone(),
            expression: map.equation.to_string(),
        })
        .collect();

    CounterDesign {
        sequence,
        state_table,
        transition_table,
        karnaugh_maps,
        equations,
        reset_info,
    }
}

/// Validate, then synthesize.
pub fn synthesize_checked(config: &CounterConfig) -> Result<CounterDesign> {
    validate_config(config)?;
    Ok(synthesize(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlipFlopKind;

    #[test]
    fn test_output_shape() {
        let config = CounterConfig::ascending(3, FlipFlopKind::Jk);
        let design = synthesize(&config);
        assert_eq!(design.sequence.len(), 8);
        assert_eq!(design.state_table.len(), 8);
        assert_eq!(design.transition_table.len(), 8);
        assert_eq!(design.karnaugh_maps.len(), 6);
        assert_eq!(design.equations.len(), 6);
    }

    #[test]
    fn test_equations_follow_map_order() {
        let config = CounterConfig::descending(2, FlipFlopKind::T);
        let design = synthesize(&config);
        for (map, eq) in design.karnaugh_maps.iter().zip(design.equations.iter()) {
            assert_eq!(map.input_name, eq.input);
            assert_eq!(map.equation.to_string(), eq.expression);
        }
    }

    #[test]
    fn test_checked_rejects_invalid() {
        let config = CounterConfig::custom(3, FlipFlopKind::D, vec![1], None);
        assert!(synthesize_checked(&config).is_err());
    }

    #[test]
    #[should_panic(expected = "at least 2 states")]
    fn test_precondition_fails_fast() {
        let config = CounterConfig::custom(3, FlipFlopKind::D, Vec::new(), None);
        synthesize(&config);
    }

    #[test]
    #[should_panic(expected = "unsupported bit width")]
    fn test_bit_width_precondition_fails_fast() {
        let config = CounterConfig::ascending(5, FlipFlopKind::T);
        synthesize(&config);
    }
}
