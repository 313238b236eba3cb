//! Tally REPL - interactive accumulator calculator.
//!
//! Reads one expression per line:
//! - `5 + 3` starts a new calculation
//! - `* 2` continues from the current result
//! - `history`, `reset`, `quit` manage the session

fn main() {
    env_logger::init();

    if let Err(e) = tally_repl::run() {
        eprintln!("REPL error: {}", e);
        std::process::exit(1);
    }
}
