//! Tallypad - Keypad Calculator Engine
//!
//! This crate implements the state machine behind a four-function keypad
//! calculator: digit and decimal entry, `+ - * /`, clear, equals, and
//! left-to-right chained evaluation with no operator precedence.
//!
//! The engine is presentation-agnostic. A UI feeds it one [`core::Token`] at
//! a time and renders whatever [`core::Engine::display`] reports; nothing
//! here draws, reads input devices, or touches the platform.
//!
//! # Example
//!
//! ```rust
//! use tallypad::prelude::*;
//!
//! let mut engine = Engine::new();
//! for token in [
//!     Token::Digit(7),
//!     Token::Op(BinaryOp::Add),
//!     Token::Digit(3),
//!     Token::Equals,
//! ] {
//!     engine.press(token);
//! }
//! assert_eq!(engine.display(), "10");
//!
//! // Or drive it symbolically, the way a keypad would:
//! let mut session = Session::new();
//! session.run_script("7+3+2=").unwrap();
//! assert_eq!(session.display(), "12");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::engine::{Engine, Phase, ERROR_DISPLAY};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{BinaryOp, CalcError, CalcResult, Token};
    pub use crate::session::{Session, TapeStep};
}
