// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Countersynth — Synchronous Binary Counter Synthesis
//!
//! Designs synchronous counters from a target state sequence and a flip-flop
//! family: the state table, the flip-flop excitation table, Karnaugh maps
//! with minimized sum-of-products equations, and the per-input equation list
//! a gate-level renderer consumes.
//!
//! ## Quick Start
//!
//! ```rust
//! use countersynth::{synthesize_checked, CounterConfig, FlipFlopKind};
//!
//! let config = CounterConfig::custom(
//!     3,                    // bit width
//!     FlipFlopKind::Jk,     // flip-flop family
//!     vec![0, 2, 5],        // visit order
//!     Some(2),              // return to 2 after 5
//! );
//!
//! let design = synthesize_checked(&config)?;
//!
//! assert_eq!(design.transition_table.len(), 8);
//! for eq in &design.equations {
//!     println!("{} = {}", eq.input, eq.expression);
//! }
//! # Ok::<(), countersynth::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                                                            │
//! │  CounterConfig                                             │
//! │       │                                                    │
//! │       ├──► validate_config(config) ──► Result<()>          │
//! │       │                                                    │
//! │       └──► synthesize(config) ──► CounterDesign            │
//! │                 │                                          │
//! │                 ├── sequence (visit order + reset info)    │
//! │                 ├── state table (visited states)           │
//! │                 ├── transition table (full state space,    │
//! │                 │    per-stage excitation inputs)          │
//! │                 ├── Karnaugh maps (one per excitation      │
//! │                 │    input, grouped and simplified)        │
//! │                 └── equations (canonical sum-of-products)  │
//! │                                                            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Scope
//!
//! The crate owns the combinational-logic synthesis pipeline and nothing
//! else: table formatting, diagram rendering and image export are consumers
//! of [`CounterDesign`]. Simplification is the greedy size-descending
//! grouping heuristic hardware texts teach for hand-drawn maps; it is
//! deterministic but not guaranteed minimal when equally-sized groups
//! compete. Swap in another [`kmap::simplify::Simplify`] implementation for
//! exact minimization.

// Core modules
pub mod bits;
pub mod config;
pub mod config_validate;
pub mod error;
pub mod logic;

// Pipeline stages
pub mod kmap;
pub mod sequence;
pub mod synth;
pub mod table;

// Re-exports
pub use config::{CountMode, CounterConfig, FlipFlopKind};
pub use config_validate::validate_config;
pub use error::{Error, Result};
pub use kmap::simplify::{
    Equation, GreedyGrouping, Group, Literal, Simplification, Simplify, Term, GROUP_PALETTE,
};
pub use kmap::{build_maps, build_maps_with, stage_labels, KarnaughMap};
pub use logic::LogicValue;
pub use sequence::{detect_repeated_reset, DetectedReset, ResetInfo};
pub use synth::{synthesize, synthesize_checked, synthesize_with, CounterDesign, InputEquation};
pub use table::{excitation, StateRow, TransitionRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
