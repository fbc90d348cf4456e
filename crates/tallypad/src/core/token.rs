//! Keypad token vocabulary
//!
//! A [`Token`] is one symbolic input unit. The enum makes out-of-vocabulary
//! input unrepresentable inside the engine; the `char` boundary used by
//! presentation layers lives in [`Token::from_symbol`].

use crate::core::BinaryOp;
use serde::{Deserialize, Serialize};

/// One keypad press: digit, decimal point, operator, clear, or equals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// One of the four arithmetic operator keys
    Op(BinaryOp),
    /// The clear key (`C`)
    Clear,
    /// The equals key (`=`)
    Equals,
}

impl Token {
    /// Maps a keypad symbol to its token.
    ///
    /// Recognizes the 16-symbol vocabulary `0-9 . + - * / C =`; anything
    /// else returns `None` and is the caller's problem to report.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => symbol.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            'C' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => BinaryOp::from_symbol(symbol).map(Self::Op),
        }
    }

    /// Returns the keypad symbol for this token.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Op(op) => op.symbol(),
            Self::Clear => 'C',
            Self::Equals => '=',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Symbol mapping tests =====

    #[test]
    fn test_from_symbol_digits() {
        for d in 0..=9u8 {
            let ch = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(Token::from_symbol(ch), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_from_symbol_operators() {
        assert_eq!(Token::from_symbol('+'), Some(Token::Op(BinaryOp::Add)));
        assert_eq!(Token::from_symbol('-'), Some(Token::Op(BinaryOp::Sub)));
        assert_eq!(Token::from_symbol('*'), Some(Token::Op(BinaryOp::Mul)));
        assert_eq!(Token::from_symbol('/'), Some(Token::Op(BinaryOp::Div)));
    }

    #[test]
    fn test_from_symbol_controls() {
        assert_eq!(Token::from_symbol('.'), Some(Token::Decimal));
        assert_eq!(Token::from_symbol('C'), Some(Token::Clear));
        assert_eq!(Token::from_symbol('='), Some(Token::Equals));
    }

    #[test]
    fn test_from_symbol_rejects_unknown() {
        for ch in ['%', '^', '(', ')', ' ', 'x', 'c'] {
            assert_eq!(Token::from_symbol(ch), None, "accepted {ch:?}");
        }
    }

    #[test]
    fn test_symbol_roundtrip() {
        for ch in "0123456789.+-*/C=".chars() {
            let token = Token::from_symbol(ch).unwrap();
            assert_eq!(token.symbol(), ch);
        }
    }

    #[test]
    fn test_token_serde_roundtrip() {
        let token = Token::Op(BinaryOp::Div);
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
