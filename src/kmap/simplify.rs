//! Karnaugh map simplification
//!
//! Finds rectangular power-of-two groups of 1/don't-care cells on the
//! toroidal grid, greedily from size 8 down to size 1, and converts each
//! accepted group into a product term. The union of terms is the minimized
//! sum-of-products equation.
//!
//! The grouping is a first-fit heuristic: within a size, candidates are
//! scanned row-major and an overlapping candidate of equal size is never
//! reconsidered once a fit is accepted. Equations can therefore be
//! non-minimal when several equally-sized groups compete; this is the
//! intended behavior, not a defect. The [`Simplify`] trait is the seam for
//! substituting an exact prime-implicant solver.
//!
//! Enumeration order and acceptance rules contain no randomness, so the
//! result for a fixed map is fully deterministic.

use crate::kmap::layout::MapLayout;
use crate::logic::LogicValue;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Group highlight colors, cycled in acceptance order
pub const GROUP_PALETTE: [&str; 6] = [
    "#22c55e", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899",
];

/// Group sizes in selection order, larger first
const GROUP_SIZES: [usize; 4] = [8, 4, 2, 1];

/// One variable occurrence in a product term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Literal {
    /// Stage label, `A` for the most significant bit
    pub var: char,
    /// True for the complemented form (`A'`)
    pub negated: bool,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}'", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

/// A product term: a conjunction of literals. The empty term is constant 1
/// (a group covering the whole map eliminates every variable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub literals: Vec<Literal>,
}

impl Term {
    /// Evaluate against an MSB-first state bit vector. Labels map to bit
    /// positions alphabetically: `A` is bit 0 of the vector.
    pub fn eval(&self, state_bits: &[u8]) -> bool {
        self.literals.iter().all(|lit| {
            let bit = state_bits[(lit.var as u8 - b'A') as usize];
            (bit == 1) != lit.negated
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "1");
        }
        let rendered: Vec<String> = self.literals.iter().map(Literal::to_string).collect();
        write!(f, "{}", rendered.join("·"))
    }
}

/// A minimized sum-of-products equation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Equation {
    /// No cell of the map is 1
    Zero,
    /// Disjunction of product terms, in derivation order
    Sum(Vec<Term>),
    /// Fallback constant; unreachable while size-1 groups exist
    One,
}

impl Equation {
    /// Evaluate against an MSB-first state bit vector.
    pub fn eval(&self, state_bits: &[u8]) -> bool {
        match self {
            Equation::Zero => false,
            Equation::Sum(terms) => terms.iter().any(|t| t.eval(state_bits)),
            Equation::One => true,
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Equation::Zero => write!(f, "0"),
            Equation::One => write!(f, "1"),
            Equation::Sum(terms) => {
                let rendered: Vec<String> = terms.iter().map(Term::to_string).collect();
                write!(f, "{}", rendered.join(" + "))
            }
        }
    }
}

/// An accepted cell group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Row-major cell indices, in enumeration order of the group shape
    pub cells: Vec<usize>,
    /// Palette color assigned at acceptance
    pub color: &'static str,
}

/// Result of simplifying one map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simplification {
    pub groups: Vec<Group>,
    pub equation: Equation,
}

/// Strategy seam for map simplification.
///
/// `cells` is the row-major grid; `labels` names the state variables, row
/// axis first. Implementations must be deterministic.
pub trait Simplify {
    fn simplify(&self, cells: &[LogicValue], layout: &MapLayout, labels: &[char])
        -> Simplification;
}

/// Greedy size-descending first-fit grouping
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyGrouping;

impl Simplify for GreedyGrouping {
    fn simplify(
        &self,
        cells: &[LogicValue],
        layout: &MapLayout,
        labels: &[char],
    ) -> Simplification {
        let mut groups: Vec<Group> = Vec::new();
        let mut terms: Vec<Term> = Vec::new();
        let mut covered: HashSet<usize> = HashSet::new();
        let mut color_cursor = 0usize;

        for size in GROUP_SIZES {
            for candidate in candidate_groups(size, layout.rows(), layout.cols()) {
                let has_new_cell = candidate.iter().any(|cell| !covered.contains(cell));
                let all_one_or_x = candidate.iter().all(|&cell| {
                    matches!(cells[cell], LogicValue::One | LogicValue::DontCare)
                });
                let has_one = candidate.iter().any(|&cell| cells[cell] == LogicValue::One);

                if has_new_cell && all_one_or_x && has_one {
                    covered.extend(candidate.iter().copied());
                    groups.push(Group {
                        cells: candidate.clone(),
                        color: GROUP_PALETTE[color_cursor % GROUP_PALETTE.len()],
                    });
                    color_cursor += 1;

                    let term = group_term(&candidate, layout, labels);
                    if !terms.contains(&term) {
                        terms.push(term);
                    }
                }
            }
        }

        let has_any_one = cells.iter().any(|&v| v == LogicValue::One);
        let equation = if !has_any_one {
            Equation::Zero
        } else if !terms.is_empty() {
            Equation::Sum(terms)
        } else {
            Equation::One
        };

        Simplification { groups, equation }
    }
}

/// Enumerate every geometrically valid group of `size` cells, wrapping on
/// both axes. Cell indices are row-major. The order here is load-bearing:
/// the greedy pass accepts the first fit.
fn candidate_groups(size: usize, rows: usize, cols: usize) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();

    match size {
        1 => {
            for r in 0..rows {
                for c in 0..cols {
                    groups.push(vec![r * cols + c]);
                }
            }
        }
        2 => {
            // horizontal pairs
            for r in 0..rows {
                for c in 0..cols {
                    let c2 = (c + 1) % cols;
                    groups.push(vec![r * cols + c, r * cols + c2]);
                }
            }
            // vertical pairs
            for r in 0..rows {
                for c in 0..cols {
                    let r2 = (r + 1) % rows;
                    groups.push(vec![r * cols + c, r2 * cols + c]);
                }
            }
        }
        4 => {
            // 2x2 squares
            for r in 0..rows {
                for c in 0..cols {
                    let r2 = (r + 1) % rows;
                    let c2 = (c + 1) % cols;
                    groups.push(vec![
                        r * cols + c,
                        r * cols + c2,
                        r2 * cols + c,
                        r2 * cols + c2,
                    ]);
                }
            }
            // 1x4 rows
            if cols >= 4 {
                for r in 0..rows {
                    for c in 0..cols {
                        groups.push(vec![
                            r * cols + c,
                            r * cols + (c + 1) % cols,
                            r * cols + (c + 2) % cols,
                            r * cols + (c + 3) % cols,
                        ]);
                    }
                }
            }
            // 4x1 columns
            if rows >= 4 {
                for c in 0..cols {
                    for r in 0..rows {
                        groups.push(vec![
                            r * cols + c,
                            ((r + 1) % rows) * cols + c,
                            ((r + 2) % rows) * cols + c,
                            ((r + 3) % rows) * cols + c,
                        ]);
                    }
                }
            }
        }
        8 => {
            // 2x4 blocks
            if cols >= 4 {
                for r in 0..rows {
                    let r2 = (r + 1) % rows;
                    for c in 0..cols {
                        let mut cells = Vec::with_capacity(8);
                        for row in [r, r2] {
                            for dc in 0..4 {
                                cells.push(row * cols + (c + dc) % cols);
                            }
                        }
                        groups.push(cells);
                    }
                }
            }
            // 4x2 blocks
            if rows >= 4 {
                for c in 0..cols {
                    let c2 = (c + 1) % cols;
                    for r in 0..rows {
                        let mut cells = Vec::with_capacity(8);
                        for dr in 0..4 {
                            let row = ((r + dr) % rows) * cols;
                            cells.push(row + c);
                            cells.push(row + c2);
                        }
                        groups.push(cells);
                    }
                }
            }
        }
        _ => {}
    }

    groups
}

/// Derive the product term of a group: a variable survives when every cell
/// of the group agrees on it, negated when the shared value is 0. Axes with
/// mixed values are eliminated.
fn group_term(cells: &[usize], layout: &MapLayout, labels: &[char]) -> Term {
    let positions: Vec<(usize, usize)> = cells.iter().map(|&cell| layout.position(cell)).collect();

    let mut literals: Vec<Literal> = Vec::new();

    for var in 0..layout.row_vars() {
        if let Some(value) = shared_value(positions.iter().map(|&(r, _)| layout.row_var(r, var))) {
            literals.push(Literal {
                var: labels[var],
                negated: value == 0,
            });
        }
    }
    for var in 0..layout.col_vars() {
        if let Some(value) = shared_value(positions.iter().map(|&(_, c)| layout.col_var(c, var))) {
            literals.push(Literal {
                var: labels[layout.row_vars() + var],
                negated: value == 0,
            });
        }
    }

    Term { literals }
}

/// The single value an iterator agrees on, if any
fn shared_value(mut values: impl Iterator<Item = u8>) -> Option<u8> {
    let first = values.next()?;
    values.all(|v| v == first).then_some(first)
}
