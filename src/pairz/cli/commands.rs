//! Dispatch for one-shot commands.
//!
//! `config` and `path` only touch the data directory. Every other command goes through
//! the controller: startup first, then the action, then one print of the list.

use super::logging;
use super::render::{print_messages, TerminalPresenter};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use pairz::commands::config::ConfigAction;
use pairz::commands::{self, CmdMessage, MessageLevel};
use pairz::config::CONFIG_KEYS;
use pairz::controller::AppController;
use pairz::error::Result;
use pairz::index::parse_selection;
use pairz::init::{initialize, PairzContext};
use pairz::store::fs_backend::FsBackend;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::debug;

/// Exit code for an add that failed validation.
const EXIT_REJECTED: u8 = 2;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_subscriber(cli.verbose);

    let cwd = std::env::current_dir()?;
    let ctx = initialize(&cwd, cli.global)?;
    debug!(scope = ?ctx.scope, key = %ctx.config.storage_key, "initialized");

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add { input }) => handle_add(&ctx, &input.join(" ")),
        Some(Commands::Sort { field }) => {
            let mut controller = start(&ctx)?;
            controller.on_sort(field.into())?;
            controller.presenter_mut().flush();
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Delete { indexes }) => handle_delete(&ctx, &indexes),
        Some(Commands::Shell) => {
            let mut controller = start(&ctx)?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell::run_session(&mut controller, stdin.lock(), interactive)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => {
            println!("{}", ctx.gateway().location()?.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

type CliController = AppController<FsBackend, TerminalPresenter>;

fn start(ctx: &PairzContext) -> Result<CliController> {
    let mut controller = ctx.controller(TerminalPresenter::new());
    controller.on_startup()?;
    Ok(controller)
}

fn handle_list(ctx: &PairzContext) -> Result<ExitCode> {
    let mut controller = start(ctx)?;
    controller.presenter_mut().flush();
    Ok(ExitCode::SUCCESS)
}

fn handle_add(ctx: &PairzContext, raw: &str) -> Result<ExitCode> {
    let mut controller = start(ctx)?;
    let result = controller.on_add(raw)?;
    if result.is_rejected() {
        return Ok(ExitCode::from(EXIT_REJECTED));
    }
    controller.presenter_mut().flush();
    Ok(ExitCode::SUCCESS)
}

fn handle_delete(ctx: &PairzContext, tokens: &[String]) -> Result<ExitCode> {
    // Bad tokens fail before anything is loaded or written.
    let selection = parse_selection(tokens)?;

    let mut controller = start(ctx)?;
    let positions = selection.positions(controller.store().len());
    let result = controller.on_delete(&positions)?;
    controller.presenter_mut().flush();

    let removed = result.affected_pairs.len();
    if removed == 0 {
        print_messages(&[CmdMessage::warning("No pairs at the given positions")]);
    } else {
        print_messages(&[CmdMessage::success(format!(
            "Deleted {} pair{}",
            removed,
            if removed == 1 { "" } else { "s" }
        ))]);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(
    ctx: &PairzContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(&ctx.paths, ctx.scope, action)?;

    if key.is_none() {
        if let Some(config) = &result.config {
            for k in CONFIG_KEYS {
                if let Some(v) = config.get(k) {
                    println!("{} = {}", k, v);
                }
            }
        }
    }
    print_messages(&result.messages);

    let failed = result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Error);
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
