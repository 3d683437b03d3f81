//! # Tally CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Each invocation is one session. It hydrates the list from the data
//! directory, replays the requested interaction as controller events, and
//! paints the resulting document. `tally shell` keeps a session open and
//! reads interactions from stdin instead.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
