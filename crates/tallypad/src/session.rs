//! Scripted sessions and replay tapes
//!
//! A [`Session`] is the seam a presentation layer (or a test harness) drives:
//! it maps keypad symbols to [`Token`]s, feeds the engine, and records every
//! step together with the display it produced. The recorded tape serializes
//! to JSON so a failing interaction can be replayed exactly.

use crate::core::{CalcError, CalcResult, Engine, Token};
use serde::{Deserialize, Serialize};

/// One recorded step: the token pressed and the display it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeStep {
    /// The token that was pressed
    pub token: Token,
    /// The display string after the press
    pub display: String,
}

/// An engine plus a recording of everything pressed into it.
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    tape: Vec<TapeStep>,
}

impl Session {
    /// Creates a session with a fresh engine and an empty tape.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            tape: Vec::new(),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The current display string.
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Presses one token and records the resulting display.
    pub fn press(&mut self, token: Token) {
        self.engine.press(token);
        self.tape.push(TapeStep {
            token,
            display: self.engine.display().to_string(),
        });
    }

    /// Presses the token behind a keypad symbol.
    ///
    /// # Errors
    ///
    /// [`CalcError::UnknownSymbol`] if the symbol is outside the keypad
    /// vocabulary `0-9 . + - * / C =`.
    pub fn press_char(&mut self, symbol: char) -> CalcResult<()> {
        let token = Token::from_symbol(symbol).ok_or(CalcError::UnknownSymbol(symbol))?;
        self.press(token);
        Ok(())
    }

    /// Feeds every symbol of a script, skipping whitespace.
    ///
    /// # Errors
    ///
    /// Stops at the first unknown symbol; everything before it has already
    /// been pressed.
    pub fn run_script(&mut self, script: &str) -> CalcResult<()> {
        for symbol in script.chars() {
            if symbol.is_whitespace() {
                continue;
            }
            self.press_char(symbol)?;
        }
        Ok(())
    }

    /// The recorded steps, oldest first.
    #[must_use]
    pub fn tape(&self) -> &[TapeStep] {
        &self.tape
    }

    /// Serializes the tape to JSON.
    pub fn tape_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.tape)
    }

    /// Replays a JSON tape into a fresh session and verifies each recorded
    /// display along the way. Returns the session on a faithful replay, or
    /// the index of the first diverging step.
    pub fn replay_json(json: &str) -> Result<Result<Self, usize>, serde_json::Error> {
        let steps: Vec<TapeStep> = serde_json::from_str(json)?;
        let mut session = Self::new();
        for (index, step) in steps.into_iter().enumerate() {
            session.press(step.token);
            if session.display() != step.display {
                return Ok(Err(index));
            }
        }
        Ok(Ok(session))
    }
}
