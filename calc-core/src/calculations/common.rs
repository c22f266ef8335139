//! Exact decimal arithmetic on display strings.
//!
//! Operands arrive as the strings the calculator displays (`"12"`, `"0.4"`,
//! `"3."`) and results leave in the same form. Everything in between is a
//! [`Decimal`], so `0.1 + 0.2` is `0.3` and never a binary-float near miss.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::Operation;

/// Result of degenerate arithmetic: division by zero, overflow, or an
/// operand that is itself `NaN`.
pub const NOT_A_NUMBER: &str = "NaN";

/// Parses a display string into a [`Decimal`].
///
/// A trailing decimal point (`"3."`, still being typed) is accepted.
/// Returns `None` for the [`NOT_A_NUMBER`] sentinel or anything else that is
/// not a finite decimal.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::parse_operand;
///
/// assert_eq!(parse_operand("0.4"), Some(dec!(0.4)));
/// assert_eq!(parse_operand("-3."), Some(dec!(-3)));
/// assert_eq!(parse_operand("NaN"), None);
/// ```
pub fn parse_operand(text: &str) -> Option<Decimal> {
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    Decimal::from_str(trimmed).ok()
}

/// Formats a [`Decimal`] in its shortest display form.
///
/// Trailing fractional zeros are dropped and zero never carries a sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::format_decimal;
///
/// assert_eq!(format_decimal(dec!(4.00)), "4");
/// assert_eq!(format_decimal(dec!(0.040)), "0.04");
/// assert_eq!(format_decimal(dec!(-0.0)), "0");
/// ```
pub fn format_decimal(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    value.normalize().to_string()
}

/// Applies `op` to two display strings.
///
/// Returns [`NOT_A_NUMBER`] when either operand does not parse, when
/// dividing by zero, or when the result does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use calc_core::Operation;
/// use calc_core::calculations::common::apply_operation;
///
/// assert_eq!(apply_operation(Operation::Add, "0.1", "0.2"), "0.3");
/// assert_eq!(apply_operation(Operation::Subtract, "9", "-8"), "17");
/// assert_eq!(apply_operation(Operation::Divide, "8", "0"), "NaN");
/// ```
pub fn apply_operation(
    op: Operation,
    lhs: &str,
    rhs: &str,
) -> String {
    let (Some(a), Some(b)) = (parse_operand(lhs), parse_operand(rhs)) else {
        warn!(%op, lhs, rhs, "operand is not a number");
        return NOT_A_NUMBER.to_string();
    };

    let result = match op {
        Operation::Add => a.checked_add(b),
        Operation::Subtract => a.checked_sub(b),
        Operation::Multiply => a.checked_mul(b),
        Operation::Divide => a.checked_div(b),
    };

    match result {
        Some(value) => format_decimal(value),
        None => {
            warn!(%op, lhs, rhs, "arithmetic overflow or division by zero");
            NOT_A_NUMBER.to_string()
        }
    }
}

/// Divides a display string by one hundred.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::percent;
///
/// assert_eq!(percent("4"), "0.04");
/// assert_eq!(percent("400"), "4");
/// ```
pub fn percent(text: &str) -> String {
    match parse_operand(text).and_then(|value| value.checked_div(Decimal::ONE_HUNDRED)) {
        Some(value) => format_decimal(value),
        None => {
            warn!(input = text, "cannot take percentage");
            NOT_A_NUMBER.to_string()
        }
    }
}

/// Flips the sign of a display string without reformatting it.
///
/// `"1.50"` becomes `"-1.50"` and `"3."` becomes `"-3."`, so an entry that
/// is still being typed keeps its shape. Zero and [`NOT_A_NUMBER`] come back
/// unchanged.
pub fn negate(text: &str) -> String {
    match parse_operand(text) {
        Some(value) if !value.is_zero() => match text.strip_prefix('-') {
            Some(positive) => positive.to_string(),
            None => format!("-{text}"),
        },
        _ => text.to_string(),
    }
}
