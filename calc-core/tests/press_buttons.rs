//! End-to-end button sequences, each starting from an empty calculator.

use calc_core::{Button, CalculatorState, Digit, Operation, press, press_all};
use pretty_assertions::assert_eq;

fn press_buttons(tokens: &[&str]) -> CalculatorState {
    let buttons: Vec<Button> = tokens
        .iter()
        .map(|token| token.parse().expect("valid test token"))
        .collect();
    press_all(buttons)
}

fn expected(
    total: Option<&str>,
    next: Option<&str>,
    operation: Option<&str>,
) -> CalculatorState {
    CalculatorState {
        total: total.map(str::to_string),
        next: next.map(str::to_string),
        operation: operation.map(|op| Operation::parse(op).expect("valid operator")),
        deferred: None,
    }
}

#[test]
fn entering_a_digit_returns_the_same() {
    for digit in Digit::all() {
        let token = digit.as_char().to_string();
        let token = token.as_str();

        assert_eq!(press_buttons(&[token]), expected(None, Some(token), None));
    }
}

#[test]
fn entering_an_operator_returns_the_same() {
    for op in ["÷", "x", "-", "+"] {
        assert_eq!(press_buttons(&[op]), expected(None, None, Some(op)));
    }
}

#[test]
fn operator_signs_also_act_as_equals() {
    assert_eq!(press_buttons(&["2", "x", "2", "+"]), expected(Some("4"), None, Some("+")));
    assert_eq!(press_buttons(&["2", "x", "2", "-"]), expected(Some("4"), None, Some("-")));
    assert_eq!(press_buttons(&["2", "x", "2", "x"]), expected(Some("4"), None, Some("x")));
    assert_eq!(press_buttons(&["2", "x", "2", "÷"]), expected(Some("4"), None, Some("÷")));
}

#[test]
fn all_clear_resets_everything() {
    assert_eq!(press_buttons(&["1", "+", "2", "AC"]), CalculatorState::new());
    assert_eq!(press_buttons(&["+", "2", "AC"]), CalculatorState::new());
    assert_eq!(press_buttons(&["3", "+", "3", "x", "AC"]), CalculatorState::new());
}

#[test]
fn all_clear_from_every_reachable_prefix() {
    let sequence = ["3", "+", "4", ".", "5", "x", "2", "%", "+/-", "÷", "0", "=", "-"];

    for end in 0..=sequence.len() {
        let state = press_buttons(&sequence[..end]);

        assert!(press(&state, Button::AllClear).is_empty(), "prefix {end}");
    }
}

#[test]
fn percent_converts_number_to_percentage() {
    assert_eq!(press_buttons(&["4", "%"]), expected(None, Some("0.04"), None));
    assert_eq!(press_buttons(&["4", "0", "0", "%"]), expected(None, Some("4"), None));
    assert_eq!(press_buttons(&["2", "%"]), expected(None, Some("0.02"), None));
}

#[test]
fn multiplying_a_percentage() {
    assert_eq!(press_buttons(&["4", "%", "x", "2", "="]), expected(Some("0.08"), None, None));
    assert_eq!(press_buttons(&["8", "%", "x", "8", "="]), expected(Some("0.64"), None, None));
}

#[test]
fn dividing_a_percentage() {
    assert_eq!(press_buttons(&["8", "%", "÷", "8", "="]), expected(Some("0.01"), None, None));
}

#[test]
fn operation_without_equals_stays_pending() {
    assert_eq!(
        press_buttons(&["4", "%", "x", "2"]),
        expected(Some("0.04"), Some("2"), Some("x"))
    );
    assert_eq!(
        press_buttons(&["6", "+", "6"]),
        expected(Some("6"), Some("6"), Some("+"))
    );
}

#[test]
fn minus_a_negated_number_adds() {
    assert_eq!(press_buttons(&["9", "-", "8", "+/-", "="]), expected(Some("17"), None, None));
}

#[test]
fn negative_times_positive_is_negative() {
    assert_eq!(press_buttons(&["8", "+/-", "x", "8", "="]), expected(Some("-64"), None, None));
}

#[test]
fn repeated_multiply_or_divide_does_not_change_the_computation() {
    assert_eq!(press_buttons(&["2", "x", "x"]), expected(Some("2"), None, Some("x")));
    assert_eq!(press_buttons(&["2", "÷", "÷"]), expected(Some("2"), None, Some("÷")));
}

#[test]
fn multiplication_and_division_bind_tighter() {
    assert_eq!(
        press_buttons(&["3", "+", "3", "x", "3", "="]),
        expected(Some("12"), None, None)
    );
    assert_eq!(
        press_buttons(&["3", "+", "3", "÷", "3", "="]),
        expected(Some("4"), None, None)
    );
}

#[test]
fn equals_closes_a_group() {
    assert_eq!(
        press_buttons(&["3", "+", "3", "=", "÷", "3", "="]),
        expected(Some("2"), None, None)
    );
}

#[test]
fn equals_without_enough_information_is_disregarded() {
    assert_eq!(press_buttons(&["3", "+", "=", "3", "="]), expected(Some("6"), None, None));
    assert_eq!(
        press_buttons(&["3", "+", "6", "=", "+"]),
        expected(Some("9"), None, Some("+"))
    );
}

#[test]
fn repeated_equals_has_no_further_effect() {
    assert_eq!(
        press_buttons(&["6", "÷", "3", "=", "=", "="]),
        expected(Some("2"), None, None)
    );
}

#[test]
fn basic_arithmetic() {
    assert_eq!(press_buttons(&["6", "÷", "6", "="]), expected(Some("1"), None, None));
    assert_eq!(press_buttons(&["6", "x", "6", "="]), expected(Some("36"), None, None));
    assert_eq!(press_buttons(&["6", "+", "6", "="]), expected(Some("12"), None, None));
    assert_eq!(press_buttons(&["6", "-", "6", "="]), expected(Some("0"), None, None));
}

#[test]
fn full_stop_creates_decimals() {
    assert_eq!(press_buttons(&["0", ".", "4"]), expected(None, Some("0.4"), None));
    assert_eq!(press_buttons(&[".", "4"]), expected(None, Some("0.4"), None));
}

#[test]
fn minus_works_with_decimal_numbers() {
    assert_eq!(
        press_buttons(&[".", "4", "-", ".", "2"]),
        expected(Some("0.4"), Some("0.2"), Some("-"))
    );
    assert_eq!(
        press_buttons(&[".", "4", "-", ".", "2", "="]),
        expected(Some("0.2"), None, None)
    );
}

#[test]
fn decimal_sums_have_no_binary_float_noise() {
    assert_eq!(
        press_buttons(&[".", "1", "+", ".", "2", "="]),
        expected(Some("0.3"), None, None)
    );
    assert_eq!(
        press_buttons(&["1", ".", "1", "x", "3", "="]),
        expected(Some("3.3"), None, None)
    );
}

#[test]
fn division_by_zero_renders_nan() {
    let state = press_buttons(&["5", "÷", "0", "="]);

    assert_eq!(state.display(), "NaN");
}
