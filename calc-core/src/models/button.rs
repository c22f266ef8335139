use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Operation;

/// Error returned when a token is not part of the keypad alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized button '{token}'")]
pub struct ParseButtonError {
    pub token: String,
}

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Self)
    }
}

/// One key on the calculator keypad.
///
/// | Token            | Variant                 |
/// |------------------|-------------------------|
/// | `0`–`9`          | [`Button::Digit`]       |
/// | `.`              | [`Button::Decimal`]     |
/// | `+` `-` `x` `÷`  | [`Button::Operator`]    |
/// | `=`              | [`Button::Equals`]      |
/// | `%`              | [`Button::Percent`]     |
/// | `+/-`            | [`Button::ToggleSign`]  |
/// | `AC`             | [`Button::AllClear`]    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Equals,
    Percent,
    ToggleSign,
    AllClear,
}

impl Button {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Digit(d) => {
                const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
                DIGITS[usize::from(d.value())]
            }
            Self::Decimal => ".",
            Self::Operator(op) => op.as_str(),
            Self::Equals => "=",
            Self::Percent => "%",
            Self::ToggleSign => "+/-",
            Self::AllClear => "AC",
        }
    }

    /// Parses a whitespace-separated run of tokens, stopping at the first
    /// unrecognized one.
    pub fn parse_sequence(input: &str) -> Result<Vec<Button>, ParseButtonError> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let button = match s {
            "." => Self::Decimal,
            "=" => Self::Equals,
            "%" => Self::Percent,
            "+/-" => Self::ToggleSign,
            "AC" => Self::AllClear,
            _ => Operation::parse(s)
                .map(Self::Operator)
                .or_else(|| match s.as_bytes() {
                    [b] if b.is_ascii_digit() => Digit::new(b - b'0').map(Self::Digit),
                    _ => None,
                })
                .ok_or_else(|| ParseButtonError {
                    token: s.to_string(),
                })?,
        };
        Ok(button)
    }
}

impl fmt::Display for Button {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Operation> for Button {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}

impl From<Digit> for Button {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}
