//! Runs a keypad script and prints the display after each press.
//!
//! ```sh
//! cargo run --example tape -- "7+3+2="
//! ```

use tallypad::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let script = std::env::args().nth(1).unwrap_or_else(|| "7+3+2=".to_string());

    let mut session = Session::new();
    session.run_script(&script)?;

    for step in session.tape() {
        println!("[{}] -> {}", step.token.symbol(), step.display);
    }
    println!("= {}", session.display());

    for entry in session.engine().history().iter() {
        println!("history: {}", entry.display());
    }

    println!("tape: {}", session.tape_json()?);
    Ok(())
}
