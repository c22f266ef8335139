use std::fmt;

use serde::{Deserialize, Serialize};

/// A pending binary operator.
///
/// Serializes as the button glyph (`+`, `-`, `x`, `÷`) so state snapshots
/// read the same way the keypad does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "x")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "x" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// `x` and `÷` bind tighter than `+` and `-`.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    pub fn is_additive(&self) -> bool {
        !self.is_multiplicative()
    }
}

impl fmt::Display for Operation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
