//! # CLI Behavior
//!
//! This is **one possible UI client** for pairz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## One-Shot Commands
//!
//! Every command starts the same way the controller always starts: load the stored list,
//! seed `Hello=World` and `Happy=Coding` if nothing was stored, save. Then it runs one
//! action and prints the list once.
//!
//! - `pairz` / `pairz list`: show the list
//! - `pairz add Name=Value`: validate and append (words are joined with spaces, so
//!   `pairz add Name = Value` works too)
//! - `pairz sort name|value`: reorder the list
//! - `pairz delete 0 2 4-6`: remove rows by their position
//!
//! Positions are the numbers printed in front of each row. They change after every
//! mutation, so always read them from the latest listing.
//!
//! ## Shell
//!
//! `pairz shell` keeps one session open: `select` marks rows, `delete` removes the marked
//! rows, and every mutation re-prints the list and drops the marks.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: The terminal presenter and message printing
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive session
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
