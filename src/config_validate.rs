//! Config validation for countersynth
//!
//! The synthesis pipeline assumes a pre-validated configuration and performs
//! no defensive checks of its own. This module is the validation collaborator
//! that upstream callers (UIs, file loaders) run before handing a config to
//! [`synthesize`](crate::synth::synthesize).

use crate::config::{CountMode, CounterConfig};
use crate::error::{Error, Result};

/// Validate a configuration against the input contract.
///
/// Rejects, in order: unsupported bit widths, custom sequences shorter than
/// two states, out-of-range sequence values, and out-of-range explicit reset
/// states. Duplicate states in a custom sequence are accepted; the sequence
/// is used as given.
pub fn validate_config(config: &CounterConfig) -> Result<()> {
    if !(2..=4).contains(&config.bits) {
        return Err(Error::BitWidth(config.bits));
    }

    let max = config.max_state();

    if config.mode == CountMode::Custom {
        if config.sequence.len() < 2 {
            return Err(Error::SequenceLength(config.sequence.len()));
        }
        for &value in &config.sequence {
            if value > max {
                return Err(Error::SequenceValue {
                    value,
                    bits: config.bits,
                    max,
                });
            }
        }
    }

    if let Some(value) = config.reset_state {
        if value > max {
            return Err(Error::ResetState {
                value,
                bits: config.bits,
                max,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlipFlopKind;

    #[test]
    fn test_accepts_builtin_modes() {
        assert!(validate_config(&CounterConfig::ascending(2, FlipFlopKind::Jk)).is_ok());
        assert!(validate_config(&CounterConfig::descending(4, FlipFlopKind::D)).is_ok());
    }

    #[test]
    fn test_rejects_bit_width() {
        let config = CounterConfig::ascending(5, FlipFlopKind::T);
        assert!(matches!(validate_config(&config), Err(Error::BitWidth(5))));
    }

    #[test]
    fn test_rejects_short_sequence() {
        let config = CounterConfig::custom(3, FlipFlopKind::T, vec![4], None);
        assert!(matches!(
            validate_config(&config),
            Err(Error::SequenceLength(1))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_value() {
        let config = CounterConfig::custom(3, FlipFlopKind::Jk, vec![0, 9], None);
        assert!(matches!(
            validate_config(&config),
            Err(Error::SequenceValue { value: 9, .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_reset() {
        let config = CounterConfig::custom(2, FlipFlopKind::D, vec![0, 1], Some(4));
        assert!(matches!(
            validate_config(&config),
            Err(Error::ResetState { value: 4, .. })
        ));
    }

    #[test]
    fn test_accepts_duplicates_in_sequence() {
        // Deduplication is not this stage's job
        let config = CounterConfig::custom(2, FlipFlopKind::T, vec![0, 1, 0, 2], None);
        assert!(validate_config(&config).is_ok());
    }
}
