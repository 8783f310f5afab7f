//! # Pairz Architecture
//!
//! Pairz keeps a small, ordered list of `Name=Value` pairs. Input lines are validated
//! against a single fixed grammar, the list can be sorted by either field, several rows
//! can be deleted at once, and the whole list survives between sessions.
//!
//! Like any library meant to outlive its first UI, the core makes no assumptions about
//! terminals: the binary in `main.rs` is just one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, owns the terminal presenter            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - One method per user action                               │
//! │  - Sequences: command → persist → render                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over a `PairStore`                            │
//! │  - Returns `CmdResult`, never touches I/O                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `StorageBackend` trait: scoped key → text blob           │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions, Not Ids
//!
//! Pairs have no identity beyond their position in the list. Every mutation is followed
//! by a re-render, and presenters drop any selection they hold when they render, so a
//! position is only ever used against the order it was read from. See [`index`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `controller.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`controller`]: The entry point for all user actions
//! - [`commands`]: Business logic for each action
//! - [`validate`]: The `Name=Value` grammar
//! - [`collection`]: The ordered pair list (`PairStore`)
//! - [`store`]: Blob storage abstraction, implementations and the snapshot gateway
//! - [`presenter`]: The rendering seam (`ListPresenter`)
//! - [`model`]: Core data types (`Pair`, `Scope`)
//! - [`index`]: Display rows and selection parsing
//! - [`config`]: Per-scope configuration
//! - [`init`]: Locating scope directories and wiring a controller for them
//! - [`error`]: Error types
//! - `cli`: Argument parsing, terminal rendering and the interactive shell (binary only)

pub mod collection;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod presenter;
pub mod store;
pub mod validate;
