//! # CLI Behavior
//!
//! This is **one possible UI client** for tally, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `tally` library.
//!
//! ## Sessions
//!
//! Every subcommand starts the app (which hydrates from the data directory),
//! then drives it with the same events a user clicking through a form would
//! produce:
//!
//! - `tally add Eggs 100` types the form and presses add.
//! - `tally edit 0 Eggs 150` clicks row 0, retypes the form, presses update.
//! - `tally delete 1` clicks row 1 and presses delete.
//! - `tally clear` presses clear all.
//!
//! Running `tally` with no arguments defaults to `tally list`.
//!
//! ## Data Directory
//!
//! Resolved in order: `--data-dir`, `$TALLY_HOME`, the platform data
//! directory for `tally`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Painting the document and messages
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive line-oriented session

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
