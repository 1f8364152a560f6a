//! State and transition tables
//!
//! The state table lists the designed sequence in visitation order. The
//! transition table covers the full state space: every state not visited by
//! the sequence is sent to the reset state, and each row carries the
//! excitation inputs that drive its stages from present to next, derived from
//! the flip-flop family's excitation law:
//!
//! | q → q′ | JK     | T | D |
//! |--------|--------|---|---|
//! | 0 → 0  | 0, X   | 0 | 0 |
//! | 0 → 1  | 1, X   | 1 | 1 |
//! | 1 → 0  | X, 1   | 1 | 0 |
//! | 1 → 1  | X, 0   | 0 | 1 |

use crate::bits::to_bits;
use crate::config::FlipFlopKind;
use crate::logic::LogicValue;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the state table: a visited state and its successor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRow {
    pub present: usize,
    pub next: usize,
    /// MSB-first bit vector of `present`
    pub present_bits: Vec<u8>,
    /// MSB-first bit vector of `next`
    pub next_bits: Vec<u8>,
}

/// One row of the full transition table, with per-stage excitation inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRow {
    pub present: usize,
    pub next: usize,
    pub present_bits: Vec<u8>,
    pub next_bits: Vec<u8>,
    /// Excitation symbols in stage order, MSB stage first; JK stages
    /// contribute J then K
    pub inputs: Vec<LogicValue>,
}

/// Build the state table: one row per sequence element, in visitation order.
/// The last element's successor is the reset state.
pub fn state_table(sequence: &[usize], bits: usize, reset_state: usize) -> Vec<StateRow> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, &present)| {
            let next = if i == sequence.len() - 1 {
                reset_state
            } else {
                sequence[i + 1]
            };
            StateRow {
                present,
                next,
                present_bits: to_bits(present, bits),
                next_bits: to_bits(next, bits),
            }
        })
        .collect()
}

/// Build the full transition table: exactly `2^bits` rows ordered by state.
///
/// States absent from the state table go to the reset state. Their excitation
/// values are still computed normally; whether a downstream consumer treats
/// them as unconstrained is its own decision.
pub fn transition_table(
    state_table: &[StateRow],
    flip_flop: FlipFlopKind,
    bits: usize,
    reset_state: usize,
) -> Vec<TransitionRow> {
    let successor: HashMap<usize, usize> = state_table
        .iter()
        .map(|row| (row.present, row.next))
        .collect();

    (0..1usize << bits)
        .map(|present| {
            let next = successor.get(&present).copied().unwrap_or(reset_state);
            let present_bits = to_bits(present, bits);
            let next_bits = to_bits(next, bits);
            let inputs = excitation_inputs(&present_bits, &next_bits, flip_flop);
            TransitionRow {
                present,
                next,
                present_bits,
                next_bits,
                inputs,
            }
        })
        .collect()
}

/// Excitation symbols for one full row, stages concatenated MSB first.
fn excitation_inputs(
    present_bits: &[u8],
    next_bits: &[u8],
    flip_flop: FlipFlopKind,
) -> Vec<LogicValue> {
    present_bits
        .iter()
        .zip(next_bits.iter())
        .flat_map(|(&q, &q_next)| excitation(flip_flop, q, q_next).iter().copied())
        .collect()
}

/// Excitation law of a single stage: the inputs that drive `q` to `q_next`.
pub fn excitation(flip_flop: FlipFlopKind, q: u8, q_next: u8) -> &'static [LogicValue] {
    use LogicValue::{DontCare, One, Zero};
    match flip_flop {
        FlipFlopKind::Jk => match (q, q_next) {
            (0, 0) => &[Zero, DontCare],
            (0, _) => &[One, DontCare],
            (_, 0) => &[DontCare, One],
            _ => &[DontCare, Zero],
        },
        FlipFlopKind::T => {
            if q == q_next {
                &[Zero]
            } else {
                &[One]
            }
        }
        FlipFlopKind::D => {
            if q_next == 0 {
                &[Zero]
            } else {
                &[One]
            }
        }
    }
}
