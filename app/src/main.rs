//! FILENAME: app/src/main.rs
//! PURPOSE: Console entry point: reads an expression, prints its value.
//! CONTEXT: Thin wrapper around the engine crate. All evaluation semantics
//! live under core/; this binary only does line IO and result formatting.

use std::io::{self, BufRead};

use clap::Parser;

/// Evaluates a whitespace-separated arithmetic expression,
/// e.g. `( 2 + 3 ) * 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate; reads one line from standard input when omitted.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let input = match args.expression {
        Some(expression) => expression,
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                eprintln!("Failed to read from standard input: {}", e);
                std::process::exit(1);
            }
            line
        }
    };

    log::debug!("evaluating: {}", input.trim_end());

    match engine::evaluate_expression(&input) {
        Ok(value) => println!("Result: {:.6}", value),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
