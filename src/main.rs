//! Terminal driver for the keypad calculator core.
//!
//! Stands in for the GUI host: with `--expr` it evaluates a single
//! expression and exits, otherwise it runs an interactive loop that
//! feeds typed characters to the session as button presses and prints
//! the active display string after each line.

use std::io::{BufRead, stdin};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tapcalc::{Button, KEYPAD_LAYOUT, Session, calculator};

#[derive(Parser, Debug)]
#[command(name = "tapcalc", about = "A keypad calculator with left-to-right evaluation")]
struct Args {
    /// Evaluate a single expression and exit.
    #[arg(long)]
    expr: Option<String>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .expect("warn filter is valid");
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    if let Some(expression) = args.expr {
        return evaluate_once(&expression);
    }

    run_interactive()
}

fn evaluate_once(expression: &str) -> Result<()> {
    match calculator::evaluate(expression) {
        Ok(value) => {
            println!("{}", calculator::format_value(value));
            Ok(())
        }
        Err(err) => {
            println!("Error");
            Err(err.into())
        }
    }
}

fn run_interactive() -> Result<()> {
    print_keypad();
    println!("Type button presses (e.g. 12+3*4=), C to clear, q to quit.");

    let mut session = Session::new();
    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }

        for c in line.trim().chars() {
            match Button::from_label(&c.to_string()) {
                Some(button) => session = session.press(button),
                None => debug!(%c, "skipping non-keypad character"),
            }
        }

        println!("{}", session.display());
    }

    Ok(())
}

fn print_keypad() {
    for row in KEYPAD_LAYOUT {
        println!("  {}", row.join(" "));
    }
}
