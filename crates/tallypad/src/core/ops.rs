//! Arithmetic operations and the literal <-> number boundary

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
}

impl BinaryOp {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Maps an operator symbol to its operation.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Division by zero fails with [`CalcError::DivisionByZero`]; any
    /// non-finite result is rejected before it can reach the display.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let raw = match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        check_finite(raw)
    }
}

/// Rejects NaN and infinite results
fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}

/// Parses a display literal as a finite decimal number.
pub fn parse_operand(literal: &str) -> CalcResult<f64> {
    let value: f64 = literal
        .parse()
        .map_err(|_| CalcError::ParseError(literal.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::ParseError(literal.to_string()))
    }
}

/// Formats a value as a display literal.
///
/// Integral values render without a fractional part, everything else with up
/// to 10 decimals and trailing zeros trimmed. The output re-parses via
/// [`parse_operand`] so chained operations see the same value they displayed.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
