//! The calculator: running result plus history.

use crate::error::CalcError;
use crate::history::History;
use crate::ops::Op;

/// Calculator configuration options.
#[derive(Clone, Debug)]
pub struct CalcConfig {
    /// How many history entries `show_history` renders at most.
    pub history_window: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self { history_window: 10 }
    }
}

/// An accumulator calculator.
///
/// Owns a running result (initially zero) and the history of successful
/// calculations. Every successful [`calculate`](Calculator::calculate)
/// overwrites the result and appends one history record; failed calculations
/// leave both untouched.
///
/// # Quick Start
///
/// ```
/// use tally::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.calculate("+", 5.0, Some(3.0)), Ok(8.0));
/// // Continuation mode: operator applied to (current result, operand).
/// assert_eq!(calc.calculate("*", 2.0, None), Ok(16.0));
/// assert_eq!(calc.result(), 16.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    result: f64,
    history: History,
    config: CalcConfig,
}

impl Calculator {
    /// Create a calculator with default configuration.
    pub fn new() -> Self {
        Self::with_config(CalcConfig::default())
    }

    /// Create a calculator with custom configuration.
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            result: 0.0,
            history: History::new(),
            config,
        }
    }

    /// Evaluate one calculation and record it.
    ///
    /// With `num2` present, applies the operator to `(num1, num2)`; the
    /// current result is ignored as an operand but overwritten by the
    /// outcome. With `num2` absent (continuation mode), applies the operator
    /// to `(current result, num1)`; note this makes the current result the
    /// dividend of a continuation division.
    ///
    /// The operator arrives as its raw input symbol; anything other than the
    /// four supported symbols is rejected with
    /// [`CalcError::UnsupportedOperator`]. On any error the result and
    /// history are left unchanged.
    pub fn calculate(
        &mut self,
        operator: &str,
        num1: f64,
        num2: Option<f64>,
    ) -> Result<f64, CalcError> {
        let op = Op::from_symbol(operator)
            .ok_or_else(|| CalcError::UnsupportedOperator(operator.to_string()))?;

        let (x, y) = match num2 {
            Some(num2) => (num1, num2),
            None => (self.result, num1),
        };

        let value = op.apply(x, y)?;
        self.history.push(format!("{} {} {} = {}", x, op, y, value));
        self.result = value;
        Ok(value)
    }

    /// Set the result back to zero and clear the history.
    pub fn reset(&mut self) {
        self.result = 0.0;
        self.history.clear();
    }

    /// The current running result.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// The recorded calculations, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Render the recent history for display.
    ///
    /// Shows at most the configured window of most recent entries, numbered
    /// in chronological order, with a total count when the history is longer
    /// than the window.
    pub fn show_history(&self) -> String {
        self.history.render(self.config.history_window)
    }
}
