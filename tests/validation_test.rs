//! Data-driven tests for the configuration validation collaborator

use countersynth::{validate_config, CounterConfig, Error, FlipFlopKind};
use rstest::rstest;

#[rstest]
#[case(2)]
#[case(3)]
#[case(4)]
fn test_supported_widths_pass(#[case] bits: usize) {
    assert!(validate_config(&CounterConfig::ascending(bits, FlipFlopKind::Jk)).is_ok());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(8)]
fn test_unsupported_widths_fail(#[case] bits: usize) {
    let result = validate_config(&CounterConfig::ascending(bits, FlipFlopKind::Jk));
    assert!(matches!(result, Err(Error::BitWidth(b)) if b == bits));
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![3], 1)]
fn test_short_custom_sequences_fail(#[case] sequence: Vec<usize>, #[case] len: usize) {
    let result = validate_config(&CounterConfig::custom(3, FlipFlopKind::T, sequence, None));
    assert!(matches!(result, Err(Error::SequenceLength(l)) if l == len));
}

#[rstest]
#[case(2, vec![0, 4])]
#[case(3, vec![0, 2, 8])]
#[case(4, vec![15, 16])]
fn test_out_of_range_sequence_values_fail(#[case] bits: usize, #[case] sequence: Vec<usize>) {
    let result = validate_config(&CounterConfig::custom(bits, FlipFlopKind::D, sequence, None));
    assert!(matches!(result, Err(Error::SequenceValue { .. })));
}

#[rstest]
#[case(2, 4)]
#[case(3, 100)]
fn test_out_of_range_reset_fails(#[case] bits: usize, #[case] reset: usize) {
    let config = CounterConfig::custom(bits, FlipFlopKind::Jk, vec![0, 1], Some(reset));
    assert!(matches!(
        validate_config(&config),
        Err(Error::ResetState { value, .. }) if value == reset
    ));
}

#[test]
fn test_boundary_values_pass() {
    let config = CounterConfig::custom(3, FlipFlopKind::T, vec![0, 7], Some(7));
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_error_messages_name_the_range() {
    let config = CounterConfig::custom(3, FlipFlopKind::T, vec![0, 9], None);
    let message = validate_config(&config).unwrap_err().to_string();
    assert!(message.contains("0..=7"), "{message}");
}
