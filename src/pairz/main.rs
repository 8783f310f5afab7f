//! # Pairz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and turns its outcome into a process exit code.
//!
//! Each invocation is one session of the list: it loads (or seeds) the stored pairs,
//! applies at most one action, saves, and prints the resulting list. `pairz shell`
//! keeps a single session open and reads actions from stdin.
//!
//! Exit codes:
//! - `0`: success
//! - `1`: error (storage, corrupt snapshot, bad arguments)
//! - `2`: the pair given to `add` was rejected

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
