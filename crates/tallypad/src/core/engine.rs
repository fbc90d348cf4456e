//! The calculator state machine
//!
//! The engine owns the display buffer and an explicit [`Phase`] tag. Every
//! `Phase` x `Token` pair has a defined transition, so there are no ambiguous
//! flag combinations: an operator can only exist together with the left
//! operand it was latched with.

use crate::core::history::History;
use crate::core::ops::{format_value, parse_operand};
use crate::core::{BinaryOp, CalcError, Token};

/// The sentinel shown after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Where the engine is within an in-progress expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Typing the first operand; the initial state, display `"0"`
    FirstOperand,
    /// An operator is latched; the next digit starts the second operand
    OperatorPending {
        /// Left operand captured when the operator was pressed
        lhs: f64,
        /// The latched operator
        op: BinaryOp,
    },
    /// Typing the second operand
    SecondOperand {
        /// Left operand the pending operator applies to
        lhs: f64,
        /// The pending operator
        op: BinaryOp,
    },
    /// Equals or an operator chain just produced a value
    ResultShown {
        /// The value on the display
        value: f64,
    },
    /// An evaluation failed; only `C` or fresh digit entry recovers
    Faulted,
}

/// Token-driven calculator engine.
///
/// Feed it one [`Token`] per key press and read back [`Engine::display`].
/// Evaluation errors never escape as panics or results; they surface as the
/// [`ERROR_DISPLAY`] marker, with the cause kept in [`Engine::last_error`].
#[derive(Debug)]
pub struct Engine {
    /// Display buffer; never empty, doubles as the in-progress operand
    display: String,
    phase: Phase,
    /// Completed evaluations, newest last
    history: History,
    last_error: Option<CalcError>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state, displaying `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            phase: Phase::FirstOperand,
            history: History::new(),
            last_error: None,
        }
    }

    /// The current display string; never empty.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The error behind the current [`ERROR_DISPLAY`], if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Completed evaluations, oldest first.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Drops all recorded evaluations.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Processes one key press.
    pub fn press(&mut self, token: Token) {
        match token {
            Token::Clear => self.reset(),
            Token::Equals => self.press_equals(),
            Token::Op(op) => self.press_operator(op),
            Token::Digit(digit) => self.press_digit(digit),
            Token::Decimal => self.press_decimal(),
        }
    }

    /// Clear: back to the initial state. History survives; only the
    /// in-progress expression is discarded. Idempotent.
    fn reset(&mut self) {
        self.display = "0".to_string();
        self.phase = Phase::FirstOperand;
        self.last_error = None;
    }

    fn press_equals(&mut self) {
        match self.phase {
            // With only the operator latched the display still holds the
            // first operand, so `7 + =` evaluates 7 + 7.
            Phase::OperatorPending { lhs, op } | Phase::SecondOperand { lhs, op } => {
                if let Some(value) = self.evaluate(lhs, op) {
                    self.phase = Phase::ResultShown { value };
                }
            }
            Phase::FirstOperand | Phase::ResultShown { .. } | Phase::Faulted => {}
        }
    }

    fn press_operator(&mut self, op: BinaryOp) {
        match self.phase {
            Phase::FirstOperand => match parse_operand(&self.display) {
                Ok(lhs) => self.phase = Phase::OperatorPending { lhs, op },
                Err(err) => self.fault(err),
            },
            // Chain onto the previous result without re-evaluating
            Phase::ResultShown { value } => self.phase = Phase::OperatorPending { lhs: value, op },
            // Two operators in a row: the new one replaces the latched one
            Phase::OperatorPending { lhs, .. } => self.phase = Phase::OperatorPending { lhs, op },
            // Left-to-right chaining: evaluate eagerly, no precedence
            Phase::SecondOperand { lhs, op: pending } => {
                if let Some(value) = self.evaluate(lhs, pending) {
                    self.phase = Phase::OperatorPending { lhs: value, op };
                }
            }
            Phase::Faulted => {}
        }
    }

    fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            // Token::Digit is documented as 0-9
            return;
        };
        match self.phase {
            Phase::FirstOperand | Phase::SecondOperand { .. } => {
                // Replace a bare "0" outright; no "05" literals
                if self.display == "0" {
                    self.display.clear();
                }
                self.display.push(ch);
            }
            Phase::OperatorPending { lhs, op } => {
                self.display = ch.to_string();
                self.phase = Phase::SecondOperand { lhs, op };
            }
            Phase::ResultShown { .. } | Phase::Faulted => {
                self.display = ch.to_string();
                self.phase = Phase::FirstOperand;
                self.last_error = None;
            }
        }
    }

    fn press_decimal(&mut self) {
        match self.phase {
            Phase::FirstOperand | Phase::SecondOperand { .. } => {
                // One decimal point per number
                if !self.display.contains('.') {
                    self.display.push('.');
                }
            }
            Phase::OperatorPending { lhs, op } => {
                self.display = "0.".to_string();
                self.phase = Phase::SecondOperand { lhs, op };
            }
            Phase::ResultShown { .. } | Phase::Faulted => {
                self.display = "0.".to_string();
                self.phase = Phase::FirstOperand;
                self.last_error = None;
            }
        }
    }

    /// Evaluates `lhs op display` and shows the outcome.
    ///
    /// On success the result is formatted onto the display, recorded in
    /// history, and returned. On failure the engine faults: display becomes
    /// [`ERROR_DISPLAY`] and the stale operand and operator are dropped.
    fn evaluate(&mut self, lhs: f64, op: BinaryOp) -> Option<f64> {
        let outcome = parse_operand(&self.display)
            .and_then(|rhs| op.apply(lhs, rhs).map(|value| (rhs, value)));
        match outcome {
            Ok((rhs, value)) => {
                self.history.record(lhs, op, rhs, value);
                self.display = format_value(value);
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.fault(err);
                None
            }
        }
    }

    fn fault(&mut self, err: CalcError) {
        self.display = ERROR_DISPLAY.to_string();
        self.phase = Phase::Faulted;
        self.last_error = Some(err);
    }
}
