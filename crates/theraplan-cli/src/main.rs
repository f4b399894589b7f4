//! # Theraplan CLI
//!
//! Therapy calendars, medication demand and shortage projection.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Load the ward snapshot (data commands only) and dispatch.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Patient or medication not found |
//! |  4   | Configuration error     |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    context::AppContext,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also land here and are not failures.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Error: failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let colored_errors = output.supports_color() && std::io::stderr().is_terminal();
    let verbose = cli.global.verbose > 0;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("Theraplan completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, colored_errors, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let snapshot = cli.global.snapshot.as_deref();

    match cli.command {
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::Plan(cmd) => {
            let ctx = AppContext::load(config, snapshot)?;
            commands::plan::execute(cmd, &ctx, &output)
        }
        Commands::Stock(cmd) => {
            let ctx = AppContext::load(config, snapshot)?;
            commands::stock::execute(cmd, &ctx, &output)
        }
        Commands::Demand(cmd) => {
            let ctx = AppContext::load(config, snapshot)?;
            commands::demand::execute(cmd, &ctx, &output)
        }
        Commands::Shortages(cmd) => {
            let ctx = AppContext::load(config, snapshot)?;
            commands::shortages::execute(cmd, &ctx, &output)
        }
        Commands::LowStock(cmd) => {
            let ctx = AppContext::load(config, snapshot)?;
            commands::low_stock::execute(cmd, &ctx, &output)
        }
        Commands::Remind(cmd) => {
            let ctx = AppContext::load(config, snapshot)?;
            commands::remind::execute(cmd, &ctx, &output)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, colored: bool, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    eprint!("{}", err.render(colored, verbose));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
