//! End-to-end synthesis scenarios
//!
//! Each test runs the whole pipeline on a small configuration and pins the
//! exact output: tables, groupings and equation strings.

use countersynth::{
    synthesize, CounterConfig, FlipFlopKind, GreedyGrouping, LogicValue, Simplify,
};
use countersynth::kmap::layout::MapLayout;
use pretty_assertions::assert_eq;

// ============================================================================
// Scenario: 2-bit JK ascending counter
// ============================================================================

#[test]
fn test_two_bit_jk_ascending() {
    use LogicValue::{DontCare, One, Zero};

    let design = synthesize(&CounterConfig::ascending(2, FlipFlopKind::Jk));

    assert_eq!(design.sequence, vec![0, 1, 2, 3]);
    assert_eq!(design.reset_info.reset_state, 0);
    assert_eq!(design.reset_info.last_state, 3);
    assert!(!design.reset_info.is_custom_reset);

    // 3 wraps to 0: both stages fall 1 -> 0, so J=X,K=1 twice
    let wrap = &design.transition_table[3];
    assert_eq!(wrap.next, 0);
    assert_eq!(wrap.inputs, vec![DontCare, One, DontCare, One]);

    // 0 -> 1: stage A holds (J=0,K=X), stage B rises (J=1,K=X)
    let first = &design.transition_table[0];
    assert_eq!(first.inputs, vec![Zero, DontCare, One, DontCare]);

    // The classic result: JA = KA = B, JB = KB = 1
    let equations: Vec<(&str, &str)> = design
        .equations
        .iter()
        .map(|eq| (eq.input.as_str(), eq.expression.as_str()))
        .collect();
    assert_eq!(
        equations,
        vec![("JA", "B"), ("KA", "B"), ("JB", "1"), ("KB", "1")]
    );
}

// ============================================================================
// Scenario: 3-bit D descending counter
// ============================================================================

#[test]
fn test_three_bit_d_descending() {
    let design = synthesize(&CounterConfig::descending(3, FlipFlopKind::D));

    assert_eq!(design.sequence, vec![7, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(design.reset_info.reset_state, 7);

    // All 8 states are in the sequence: the table is fully specified and
    // the LSB map holds next(s) mod 2 at every state
    let dc = &design.karnaugh_maps[2];
    assert_eq!(dc.input_name, "DC");
    let layout = MapLayout::for_bits(3);
    for row in 0..2 {
        for col in 0..4 {
            let state = layout.state_at(row, col);
            let next = design.transition_table[state].next;
            assert_eq!(dc.cell(row, col), LogicValue::from_bit((next & 1) as u8));
        }
    }

    // next(s) = s - 1 (wrapping), whose low bit is s inverted: DC = C'
    assert_eq!(design.equations[2].expression, "C'");
}

// ============================================================================
// Scenario: custom sequence with explicit reset
// ============================================================================

#[test]
fn test_custom_sequence_with_explicit_reset() {
    let design = synthesize(&CounterConfig::custom(
        3,
        FlipFlopKind::T,
        vec![0, 2, 5],
        Some(2),
    ));

    assert_eq!(design.reset_info.reset_state, 2);
    assert!(design.reset_info.is_custom_reset);

    // Last visited state returns to the explicit reset, not to sequence[0]
    let last = design.state_table.last().unwrap();
    assert_eq!(last.present, 5);
    assert_eq!(last.next, 2);

    // Unvisited states are parked at the reset state too
    for state in [1, 3, 4, 6, 7] {
        assert_eq!(design.transition_table[state].next, 2);
    }
}

// ============================================================================
// Scenario: single-variable reduction
// ============================================================================

#[test]
fn test_single_variable_reduction() {
    // A 4-bit map that is 1 exactly where A=1 (grid rows with Gray codes
    // 11 and 10) must collapse to the single literal "A": one maximal
    // group, no extra terms.
    let layout = MapLayout::for_bits(4);
    let cells: Vec<LogicValue> = (0..4)
        .flat_map(|row| {
            (0..4).map(move |col| (row, col))
        })
        .map(|(row, col)| {
            if layout.state_at(row, col) & 0b1000 != 0 {
                LogicValue::One
            } else {
                LogicValue::Zero
            }
        })
        .collect();

    let result = GreedyGrouping.simplify(&cells, &layout, &['A', 'B', 'C', 'D']);

    assert_eq!(result.groups.len(), 1);
    assert_eq!(result.groups[0].cells.len(), 8);
    assert_eq!(result.equation.to_string(), "A");
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identical_configs_yield_identical_output() {
    let config = CounterConfig::custom(4, FlipFlopKind::Jk, vec![0, 3, 9, 14, 7], Some(3));
    let first = synthesize(&config);
    let second = synthesize(&config);
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}
