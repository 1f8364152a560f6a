//! Karnaugh map construction
//!
//! Builds one map per excitation input from the transition table, then hands
//! each map to a [`Simplify`] strategy for grouping and equation derivation.
//!
//! ## Submodules
//!
//! - `layout` - grid geometry and Gray-code state placement
//! - `simplify` - grouping strategies, product terms, equations

pub mod layout;
pub mod simplify;

use crate::config::FlipFlopKind;
use crate::logic::LogicValue;
use crate::table::TransitionRow;
use layout::MapLayout;
use serde::Serialize;
use simplify::{Equation, GreedyGrouping, Group, Simplify};

/// A Karnaugh map for one excitation input, with its grouping and equation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KarnaughMap {
    /// Excitation input this map covers, e.g. `JA` or `TC`
    pub input_name: String,
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Cell values, row-major
    pub cells: Vec<LogicValue>,
    /// Accepted groups in acceptance order
    pub groups: Vec<Group>,
    /// Minimized sum-of-products equation
    pub equation: Equation,
}

impl KarnaughMap {
    /// Cell value at a grid position
    pub fn cell(&self, row: usize, col: usize) -> LogicValue {
        self.cells[row * self.cols + col]
    }

    /// The geometry of this map, recovered from its dimensions
    pub fn layout(&self) -> MapLayout {
        MapLayout::for_bits(self.rows.trailing_zeros() as usize + self.cols.trailing_zeros() as usize)
    }
}

/// Single-letter stage labels, `A` for the most significant bit.
pub fn stage_labels(bits: usize) -> Vec<char> {
    (0..bits).map(|i| (b'A' + i as u8) as char).collect()
}

/// Name of one excitation input of a stage
fn input_name(flip_flop: FlipFlopKind, label: char, input_index: usize) -> String {
    match flip_flop {
        FlipFlopKind::Jk => {
            if input_index == 0 {
                format!("J{label}")
            } else {
                format!("K{label}")
            }
        }
        FlipFlopKind::T => format!("T{label}"),
        FlipFlopKind::D => format!("D{label}"),
    }
}

/// Build and simplify every excitation-input map with the default greedy
/// grouping strategy.
pub fn build_maps(
    table: &[TransitionRow],
    flip_flop: FlipFlopKind,
    bits: usize,
) -> Vec<KarnaughMap> {
    build_maps_with(table, flip_flop, bits, &GreedyGrouping)
}

/// Build and simplify every excitation-input map with an explicit strategy.
///
/// Maps come out in stage order (MSB stage first); a JK stage contributes its
/// J map before its K map.
pub fn build_maps_with(
    table: &[TransitionRow],
    flip_flop: FlipFlopKind,
    bits: usize,
    simplifier: &dyn Simplify,
) -> Vec<KarnaughMap> {
    let layout = MapLayout::for_bits(bits);
    let labels = stage_labels(bits);
    let inputs_per_stage = flip_flop.inputs_per_stage();

    let mut maps = Vec::with_capacity(bits * inputs_per_stage);
    for stage in 0..bits {
        for input in 0..inputs_per_stage {
            let input_index = stage * inputs_per_stage + input;
            let cells = collect_cells(table, &layout, input_index);
            let simplification = simplifier.simplify(&cells, &layout, &labels);
            maps.push(KarnaughMap {
                input_name: input_name(flip_flop, labels[stage], input),
                rows: layout.rows(),
                cols: layout.cols(),
                cells,
                groups: simplification.groups,
                equation: simplification.equation,
            });
        }
    }
    maps
}

/// Fill the grid for one excitation input by placing each state's value at
/// its Gray-coded position.
fn collect_cells(table: &[TransitionRow], layout: &MapLayout, input_index: usize) -> Vec<LogicValue> {
    let mut cells = Vec::with_capacity(layout.cell_count());
    for row in 0..layout.rows() {
        for col in 0..layout.cols() {
            cells.push(input_value(table, layout.state_at(row, col), input_index));
        }
    }
    cells
}

/// Excitation value of one input at one state. A state with no transition
/// row is unconstrained; with a complete table this branch never fires.
fn input_value(table: &[TransitionRow], state: usize, input_index: usize) -> LogicValue {
    table
        .iter()
        .find(|row| row.present == state)
        .map_or(LogicValue::DontCare, |row| row.inputs[input_index])
}
