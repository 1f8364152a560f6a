//! Counter configuration — the input contract
//!
//! A [`CounterConfig`] fully describes the counter to synthesize: the state
//! width, the flip-flop family realizing each bit, and the visit order of
//! states. Configurations are plain data and can be read from YAML or JSON.
//!
//! ## Example config
//!
//! ```yaml
//! bits: 3
//! flip_flop: JK
//! mode: custom
//! sequence: [0, 2, 5]
//! reset_state: 2
//! ```

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Flip-flop family used for every stage of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlipFlopKind {
    /// JK flip-flop: two control inputs per stage
    Jk,
    /// Toggle flip-flop: one control input per stage
    T,
    /// Data flip-flop: one control input per stage, D = Q⁺
    D,
}

impl FlipFlopKind {
    /// Number of excitation inputs each stage of this family requires
    pub fn inputs_per_stage(self) -> usize {
        match self {
            FlipFlopKind::Jk => 2,
            FlipFlopKind::T | FlipFlopKind::D => 1,
        }
    }
}

/// State visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    /// 0, 1, …, 2^bits − 1
    Ascending,
    /// 2^bits − 1, …, 1, 0
    Descending,
    /// Caller-supplied sequence
    Custom,
}

/// A complete counter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Counter Config", description = "Synchronous counter specification")]
pub struct CounterConfig {
    /// State width in bits (2, 3 or 4)
    pub bits: usize,

    /// Flip-flop family realizing each stage
    pub flip_flop: FlipFlopKind,

    /// State visit order
    pub mode: CountMode,

    /// Explicit sequence for [`CountMode::Custom`]; ignored otherwise
    #[serde(default)]
    pub sequence: Vec<usize>,

    /// State the counter returns to after the last sequence element;
    /// defaults to the first sequence element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_state: Option<usize>,
}

impl CounterConfig {
    /// Ascending counter over the full state space
    pub fn ascending(bits: usize, flip_flop: FlipFlopKind) -> Self {
        CounterConfig {
            bits,
            flip_flop,
            mode: CountMode::Ascending,
            sequence: Vec::new(),
            reset_state: None,
        }
    }

    /// Descending counter over the full state space
    pub fn descending(bits: usize, flip_flop: FlipFlopKind) -> Self {
        CounterConfig {
            bits,
            flip_flop,
            mode: CountMode::Descending,
            sequence: Vec::new(),
            reset_state: None,
        }
    }

    /// Counter over an explicit state sequence
    pub fn custom(
        bits: usize,
        flip_flop: FlipFlopKind,
        sequence: Vec<usize>,
        reset_state: Option<usize>,
    ) -> Self {
        CounterConfig {
            bits,
            flip_flop,
            mode: CountMode::Custom,
            sequence,
            reset_state,
        }
    }

    /// Largest representable state
    pub fn max_state(&self) -> usize {
        (1 << self.bits) - 1
    }

    /// Size of the full state space
    pub fn state_count(&self) -> usize {
        1 << self.bits
    }

    /// Parse config from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Serialize config to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Parse config from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Serialize config to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
