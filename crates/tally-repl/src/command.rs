//! Input line parsing.
//!
//! One line of input becomes one [`Command`]. The shapes, after trimming and
//! lowercasing:
//!
//! - `quit` / `q` / `exit`, `reset`, `history` - session commands
//! - `OP NUM` - continue from the current result (e.g. `* 2`)
//! - `NUM OP NUM` - start a new calculation (e.g. `5 + 3`)
//!
//! Anything else is malformed. The operator token is *not* validated here;
//! an unknown symbol travels through so the calculator can reject it as an
//! unsupported operator rather than a formatting mistake.

use thiserror::Error;

/// One parsed line of user input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// End the session.
    Quit,
    /// Reset result and history.
    Reset,
    /// Show recent calculations.
    History,
    /// Run a calculation. `num2` is absent in continuation mode.
    Calc {
        operator: String,
        num1: f64,
        num2: Option<f64>,
    },
}

/// The line did not match any recognized input shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("expected `NUM OP NUM`, `OP NUM`, or one of `history`, `reset`, `quit`")]
pub struct MalformedInput;

/// Parse one input line.
///
/// The caller is expected to skip lines that are empty after trimming;
/// passing one here reports it as malformed.
pub fn parse(line: &str) -> Result<Command, MalformedInput> {
    let line = line.trim().to_lowercase();

    match line.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "reset" => return Ok(Command::Reset),
        "history" => return Ok(Command::History),
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        // Continuation mode: operator, then one operand.
        [operator, num] => {
            let num1 = num.parse().map_err(|_| MalformedInput)?;
            Ok(Command::Calc {
                operator: (*operator).to_string(),
                num1,
                num2: None,
            })
        }
        // New calculation: two operands around an operator.
        [num1, operator, num2] => {
            let num1 = num1.parse().map_err(|_| MalformedInput)?;
            let num2 = num2.parse().map_err(|_| MalformedInput)?;
            Ok(Command::Calc {
                operator: (*operator).to_string(),
                num1,
                num2: Some(num2),
            })
        }
        _ => Err(MalformedInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(operator: &str, num1: f64, num2: Option<f64>) -> Command {
        Command::Calc {
            operator: operator.to_string(),
            num1,
            num2,
        }
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("exit"), Ok(Command::Quit));
        assert_eq!(parse("reset"), Ok(Command::Reset));
        assert_eq!(parse("history"), Ok(Command::History));
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse("QUIT"), Ok(Command::Quit));
        assert_eq!(parse("  History  "), Ok(Command::History));
    }

    #[test]
    fn new_calculation() {
        assert_eq!(parse("5 + 3"), Ok(calc("+", 5.0, Some(3.0))));
        assert_eq!(parse("-2.5 * 4"), Ok(calc("*", -2.5, Some(4.0))));
        assert_eq!(parse("1e3 / 10"), Ok(calc("/", 1000.0, Some(10.0))));
    }

    #[test]
    fn continuation_calculation() {
        assert_eq!(parse("* 2"), Ok(calc("*", 2.0, None)));
        assert_eq!(parse("/ 0"), Ok(calc("/", 0.0, None)), "a zero operand is well-formed");
    }

    #[test]
    fn operator_token_is_not_validated() {
        // Unknown operators are the calculator's problem, not a format error.
        assert_eq!(parse("% 3"), Ok(calc("%", 3.0, None)));
        assert_eq!(parse("2 ^ 8"), Ok(calc("^", 2.0, Some(8.0))));
    }

    #[test]
    fn malformed_operands() {
        assert_eq!(parse("+ abc"), Err(MalformedInput));
        assert_eq!(parse("abc + 3"), Err(MalformedInput));
        assert_eq!(parse("5 + abc"), Err(MalformedInput));
    }

    #[test]
    fn malformed_shapes() {
        assert_eq!(parse(""), Err(MalformedInput));
        assert_eq!(parse("5"), Err(MalformedInput));
        assert_eq!(parse("1 + 2 + 3"), Err(MalformedInput));
        assert_eq!(parse("quit now"), Err(MalformedInput));
    }
}
