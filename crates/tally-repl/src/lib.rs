//! Interactive REPL for the tally calculator.
//!
//! A single-threaded prompt loop: read a line, parse it into a [`Command`],
//! dispatch to the [`Calculator`], print the outcome. The loop shows the
//! current accumulator before every prompt and only ends on a quit command
//! (or end-of-input).

use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

use tally::Calculator;

mod command;

pub use command::{Command, MalformedInput, parse};

/// Errors that can abort the REPL itself.
///
/// Calculation and input-format problems are reported inline and never end
/// the session; this covers terminal-level failures only.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("terminal error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Run the interactive loop until the user quits.
pub fn run() -> Result<(), ReplError> {
    let mut rl = DefaultEditor::new()?;
    let mut calc = Calculator::new();

    print_banner();

    loop {
        println!();
        println!("Current result: {}", calc.result());

        let line = match rl.readline("> ") {
            Ok(line) => line,
            // Ctrl-C drops the pending line and re-prompts.
            Err(ReadlineError::Interrupted) => continue,
            // Ctrl-D ends the session like `quit`.
            Err(ReadlineError::Eof) => {
                print_farewell();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(input);

        match command::parse(input) {
            Ok(Command::Quit) => {
                print_farewell();
                return Ok(());
            }
            Ok(Command::Reset) => {
                calc.reset();
                println!("Calculator has been reset.");
            }
            Ok(Command::History) => {
                println!("{}", calc.show_history());
            }
            Ok(Command::Calc {
                operator,
                num1,
                num2,
            }) => {
                debug!("calculation: operator={:?} num1={} num2={:?}", operator, num1, num2);
                run_calculation(&mut calc, &operator, num1, num2);
            }
            Err(e) => {
                debug!("malformed input: {:?}", input);
                println!("Invalid input: {}", e);
            }
        }
    }
}

/// Run one calculation and print its outcome.
fn run_calculation(calc: &mut Calculator, operator: &str, num1: f64, num2: Option<f64>) {
    // Effective operands, captured before the accumulator moves.
    let (lhs, rhs) = match num2 {
        Some(num2) => (num1, num2),
        None => (calc.result(), num1),
    };

    match calc.calculate(operator, num1, num2) {
        Ok(value) => println!("{} {} {} = {}", lhs, operator, rhs, value),
        Err(e) => println!("Calculation error: {}", e),
    }
}

fn print_banner() {
    println!("========================================");
    println!(" Tally - interactive calculator");
    println!("========================================");
    println!("How to use:");
    println!("  NUM OP NUM   new calculation       (e.g. 5 + 3)");
    println!("  OP NUM       continue from result  (e.g. * 2)");
    println!("  history      show recent calculations");
    println!("  reset        set the result back to zero");
    println!("  quit         exit (also: q, exit)");
    println!("========================================");
}

fn print_farewell() {
    println!("Thanks for using tally. Goodbye!");
}
