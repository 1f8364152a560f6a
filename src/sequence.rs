//! Sequence materialization
//!
//! Turns a [`CounterConfig`] into the ordered list of visited states and the
//! designated reset state. Validation of custom sequences happens upstream in
//! [`config_validate`](crate::config_validate); this stage uses them as-is.

use crate::config::{CountMode, CounterConfig};
use serde::Serialize;
use std::collections::HashSet;

/// How the designed sequence returns to its starting point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResetInfo {
    /// Last element of the sequence
    pub last_state: usize,
    /// State entered after the last element
    pub reset_state: usize,
    /// True when the reset state differs from the first sequence element
    pub is_custom_reset: bool,
}

/// Materialize the visited-state sequence for a configuration.
pub fn materialize(config: &CounterConfig) -> Vec<usize> {
    let count = config.state_count();
    match config.mode {
        CountMode::Ascending => (0..count).collect(),
        CountMode::Descending => (0..count).rev().collect(),
        CountMode::Custom => config.sequence.clone(),
    }
}

/// Effective reset state: the explicit override if present, else the first
/// sequence element.
pub fn effective_reset(sequence: &[usize], reset_state: Option<usize>) -> usize {
    reset_state.unwrap_or(sequence[0])
}

/// Compute the reset record for a materialized sequence.
pub fn reset_info(sequence: &[usize], reset_state: Option<usize>) -> ResetInfo {
    let reset = effective_reset(sequence, reset_state);
    ResetInfo {
        last_state: sequence[sequence.len() - 1],
        reset_state: reset,
        is_custom_reset: reset != sequence[0],
    }
}

/// A reset state implied by a repeated element in a raw custom sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedReset {
    /// The repeated state, interpreted as the reset point
    pub state: usize,
    /// The sequence truncated before the last occurrence of the repeat
    pub sequence: Vec<usize>,
}

/// Detect a reset state from a raw user sequence whose tail revisits an
/// earlier state, e.g. `[0, 2, 5, 0]` implies reset to 0 with the unique
/// sequence `[0, 2, 5]`.
///
/// The first value to appear twice is taken as the reset point. Front-end
/// helper only; the pipeline never calls this.
pub fn detect_repeated_reset(raw: &[usize]) -> Option<DetectedReset> {
    let mut seen = HashSet::new();
    let state = raw.iter().copied().find(|&n| !seen.insert(n))?;
    let cut = raw.iter().rposition(|&n| n == state)?;
    Some(DetectedReset {
        state,
        sequence: raw[..cut].to_vec(),
    })
}
