//! Three-valued logic cells
//!
//! Excitation tables and Karnaugh maps share one value domain: a required
//! input can be driven low, driven high, or left unconstrained (don't care).

use serde::Serialize;
use std::fmt;

/// Value of a single excitation input or Karnaugh map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicValue {
    /// Input must be 0
    #[serde(rename = "0")]
    Zero,
    /// Input must be 1
    #[serde(rename = "1")]
    One,
    /// Input can be either (don't care)
    #[serde(rename = "X")]
    DontCare,
}

impl LogicValue {
    /// Parse a character into a LogicValue
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(LogicValue::Zero),
            '1' => Some(LogicValue::One),
            'x' | 'X' | '-' => Some(LogicValue::DontCare),
            _ => None,
        }
    }

    /// Convert to character representation
    pub fn to_char(self) -> char {
        match self {
            LogicValue::Zero => '0',
            LogicValue::One => '1',
            LogicValue::DontCare => 'X',
        }
    }

    /// Check if this value is specified (not don't care)
    pub fn is_specified(self) -> bool {
        matches!(self, LogicValue::Zero | LogicValue::One)
    }

    /// Value of a concrete bit
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            LogicValue::Zero
        } else {
            LogicValue::One
        }
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
