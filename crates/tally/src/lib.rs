//! Tally - an accumulator calculator.
//!
//! This crate implements the calculation side of the interactive calculator:
//! - **Operations**: the four binary arithmetic operations over reals
//! - **State**: a running result that each calculation feeds into
//! - **History**: an append-only log of completed calculations with a
//!   windowed display rendering
//!
//! It performs no I/O; the REPL driver in `tally-repl` owns the terminal.
//!
//! # Quick Start
//!
//! ```
//! use tally::Calculator;
//!
//! let mut calc = Calculator::new();
//!
//! match calc.calculate("+", 5.0, Some(3.0)) {
//!     Ok(value) => println!("Result: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

pub mod calc;
pub mod error;
pub mod history;
pub mod ops;

pub use calc::{CalcConfig, Calculator};
pub use error::CalcError;
pub use history::History;
pub use ops::Op;
