//! Property-based tests for digit entry and evaluation.

use proptest::prelude::*;
use tallypad::prelude::*;

/// What the display should show after entering `digits` from the idle state:
/// the concatenation with leading zeros collapsed.
fn expected_entry(digits: &[u8]) -> String {
    let concatenated: String = digits.iter().map(|d| d.to_string()).collect();
    let trimmed = concatenated.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

proptest! {
    #[test]
    fn prop_digit_entry_collapses_leading_zeros(digits in prop::collection::vec(0u8..=9, 1..12)) {
        let mut engine = Engine::new();
        for &d in &digits {
            engine.press(Token::Digit(d));
        }
        prop_assert_eq!(engine.display(), expected_entry(&digits));
    }

    #[test]
    fn prop_single_binary_evaluation(
        a in prop::collection::vec(0u8..=9, 1..8),
        b in prop::collection::vec(0u8..=9, 1..8),
        op_symbol in prop::sample::select(vec!['+', '-', '*', '/']),
    ) {
        let op = BinaryOp::from_symbol(op_symbol).unwrap();
        let lhs: f64 = expected_entry(&a).parse().unwrap();
        let rhs: f64 = expected_entry(&b).parse().unwrap();

        let mut engine = Engine::new();
        for &d in &a {
            engine.press(Token::Digit(d));
        }
        engine.press(Token::Op(op));
        for &d in &b {
            engine.press(Token::Digit(d));
        }
        engine.press(Token::Equals);

        if op == BinaryOp::Div && rhs == 0.0 {
            prop_assert_eq!(engine.display(), ERROR_DISPLAY);
        } else {
            let shown: f64 = engine.display().parse().unwrap();
            let exact = match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => lhs / rhs,
            };
            // Display formatting rounds at 10 decimals
            prop_assert!((shown - exact).abs() <= 1e-9 * exact.abs().max(1.0));
        }
    }

    #[test]
    fn prop_clear_always_returns_to_idle(script in "[0-9.+*/=C-]{0,24}") {
        let mut session = Session::new();
        session.run_script(&script).unwrap();
        session.press(Token::Clear);
        prop_assert_eq!(session.display(), "0");
    }

    #[test]
    fn prop_display_is_never_empty(script in "[0-9.+*/=C-]{0,24}") {
        let mut session = Session::new();
        session.run_script(&script).unwrap();
        prop_assert!(!session.display().is_empty());
    }

    #[test]
    fn prop_tape_replays_faithfully(script in "[0-9.+*/=C-]{0,24}") {
        let mut session = Session::new();
        session.run_script(&script).unwrap();
        let json = session.tape_json().unwrap();
        let replayed = Session::replay_json(&json).unwrap();
        prop_assert!(replayed.is_ok());
    }
}
