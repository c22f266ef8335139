//! The button-press state machine.
//!
//! [`calculate`] maps the current [`CalculatorState`] and one [`Button`] to
//! the [`StatePatch`] describing what changes. It never fails: every button
//! is defined in every state, and degenerate arithmetic produces the
//! [`NOT_A_NUMBER`](super::common::NOT_A_NUMBER) sentinel instead of an
//! error.
//!
//! # Example
//!
//! ```
//! use calc_core::{Button, CalculatorState, Operation, calculate};
//!
//! let state = CalculatorState {
//!     total: Some("6".to_string()),
//!     next: Some("6".to_string()),
//!     operation: Some(Operation::Add),
//!     deferred: None,
//! };
//!
//! let after = state.apply(calculate(&state, Button::Equals));
//!
//! assert_eq!(after.total.as_deref(), Some("12"));
//! assert_eq!(after.next, None);
//! assert_eq!(after.operation, None);
//! ```

use tracing::{debug, trace};

use super::common::{NOT_A_NUMBER, apply_operation, negate, percent};
use crate::{Button, CalculatorState, Deferred, Digit, Field, Operation, StatePatch};

/// Computes the patch produced by pressing `button` in `state`.
pub fn calculate(
    state: &CalculatorState,
    button: Button,
) -> StatePatch {
    let patch = match button {
        Button::AllClear => StatePatch::clear_all(),
        Button::Digit(digit) => press_digit(state, digit),
        Button::Decimal => press_decimal(state),
        Button::Operator(op) => press_operator(state, op),
        Button::Equals => press_equals(state),
        Button::Percent => press_percent(state),
        Button::ToggleSign => press_toggle_sign(state),
    };
    trace!(%button, ?state, ?patch, "transition");
    patch
}

/// Presses `button` and returns the resulting state.
pub fn press(
    state: &CalculatorState,
    button: Button,
) -> CalculatorState {
    state.apply(calculate(state, button))
}

/// Presses every button in order, starting from the empty state.
pub fn press_all<I>(buttons: I) -> CalculatorState
where
    I: IntoIterator<Item = Button>,
{
    buttons
        .into_iter()
        .fold(CalculatorState::new(), |state, button| press(&state, button))
}

/// Longest entry, in digits, that a `Decimal` holds exactly.
const MAX_ENTRY_DIGITS: usize = 28;

/// Counts the digits an entry occupies in a `Decimal`. The lone zero in
/// front of a fraction (`"0.5"`, `"-0.5"`) takes no room.
fn entry_digits(entry: &str) -> usize {
    let unsigned = entry.strip_prefix('-').unwrap_or(entry);
    let digits = unsigned.strip_prefix("0.").unwrap_or(unsigned);
    digits.bytes().filter(u8::is_ascii_digit).count()
}

fn press_digit(
    state: &CalculatorState,
    digit: Digit,
) -> StatePatch {
    let next = match state.next.as_deref() {
        None | Some("0") | Some(NOT_A_NUMBER) => digit.as_char().to_string(),
        Some(current) if entry_digits(current) >= MAX_ENTRY_DIGITS => {
            debug!(next = current, "entry full, ignoring digit");
            return StatePatch::none();
        }
        Some(current) => format!("{current}{}", digit.as_char()),
    };
    StatePatch {
        next: Field::Set(next),
        ..StatePatch::none()
    }
}

fn press_decimal(state: &CalculatorState) -> StatePatch {
    let next = match state.next.as_deref() {
        None | Some(NOT_A_NUMBER) => "0.".to_string(),
        Some(current) if current.contains('.') => return StatePatch::none(),
        Some(current) => format!("{current}."),
    };
    StatePatch {
        next: Field::Set(next),
        ..StatePatch::none()
    }
}

fn press_operator(
    state: &CalculatorState,
    op: Operation,
) -> StatePatch {
    let Some(next) = state.next.as_deref() else {
        return switch_operator(state, op);
    };

    let (total, pending) = match (state.total.as_deref(), state.operation) {
        (Some(total), Some(pending)) => (total, pending),
        // Nothing to combine with yet: the entry becomes the running total.
        _ => {
            return StatePatch {
                total: Field::Set(next.to_string()),
                next: Field::Cleared,
                operation: Field::Set(op),
                ..StatePatch::none()
            };
        }
    };

    if pending.is_additive() && op.is_multiplicative() {
        debug!(total, %pending, "deferring additive term");
        return StatePatch {
            total: Field::Set(next.to_string()),
            next: Field::Cleared,
            operation: Field::Set(op),
            deferred: Field::Set(Deferred {
                total: total.to_string(),
                operation: pending,
            }),
        };
    }

    let result = apply_operation(pending, total, next);
    let (total, deferred) = if op.is_additive() {
        (fold_deferred(state, result), Field::Cleared)
    } else {
        (result, Field::Unchanged)
    };

    StatePatch {
        total: Field::Set(total),
        next: Field::Cleared,
        operation: Field::Set(op),
        deferred,
    }
}

/// Operator pressed with no entry: only the pending operator changes.
///
/// Switching from a multiplicative to an additive operator closes the
/// multiplicative run, so any deferred term is folded in first.
fn switch_operator(
    state: &CalculatorState,
    op: Operation,
) -> StatePatch {
    match (&state.total, &state.deferred) {
        (Some(total), Some(_)) if op.is_additive() => StatePatch {
            total: Field::Set(fold_deferred(state, total.clone())),
            operation: Field::Set(op),
            deferred: Field::Cleared,
            ..StatePatch::none()
        },
        _ => StatePatch {
            operation: Field::Set(op),
            ..StatePatch::none()
        },
    }
}

fn press_equals(state: &CalculatorState) -> StatePatch {
    let (Some(op), Some(next)) = (state.operation, state.next.as_deref()) else {
        debug!(?state, "not enough input for '=', ignoring");
        return StatePatch::none();
    };

    let lhs = state.total.as_deref().unwrap_or(next);
    let result = fold_deferred(state, apply_operation(op, lhs, next));

    StatePatch {
        total: Field::Set(result),
        next: Field::Cleared,
        operation: Field::Cleared,
        deferred: Field::Cleared,
    }
}

fn press_percent(state: &CalculatorState) -> StatePatch {
    match state.next.as_deref() {
        Some(next) => StatePatch {
            next: Field::Set(percent(next)),
            ..StatePatch::none()
        },
        None => StatePatch::none(),
    }
}

fn press_toggle_sign(state: &CalculatorState) -> StatePatch {
    match (state.next.as_deref(), state.total.as_deref()) {
        (Some(next), _) => StatePatch {
            next: Field::Set(negate(next)),
            ..StatePatch::none()
        },
        (None, Some(total)) => StatePatch {
            total: Field::Set(negate(total)),
            ..StatePatch::none()
        },
        (None, None) => StatePatch::none(),
    }
}

/// Combines a finished multiplicative run with the parked additive term.
fn fold_deferred(
    state: &CalculatorState,
    value: String,
) -> String {
    match &state.deferred {
        Some(deferred) => apply_operation(deferred.operation, &deferred.total, &value),
        None => value,
    }
}
