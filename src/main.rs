//! # boom CLI
//!
//! Command-line interface for boom.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use boom::{
    commands::{self, meta},
    config::BACKEND_KEY,
    constants::LOG_ENV_VAR,
    BoomError, ConfigStore, GlobalConfig, Registry, Session, Storage, Style, SystemPlatform,
};

#[derive(Parser)]
#[command(name = "boom")]
#[command(author = "Dominic Rodemer")]
#[command(about = "Motherflippin' text snippets on the command line")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// `[<command> [<major> [<minor>]]]`, see `boom help`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

fn run() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let style = if io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
        Style::colored()
    } else {
        Style::plain()
    };

    let mut config = GlobalConfig::load()?;
    let registry = Registry::default();
    let mut out = io::stdout();

    let configured = config.get(BACKEND_KEY).unwrap_or_default();

    // A broken backend must not lock the user out of switching away from it
    if cli.args.first().is_some_and(|c| c == "switch") {
        return meta::switch_backend(
            &registry,
            &mut config,
            cli.args.get(1).map(String::as_str),
            &configured,
            style,
            &mut out,
        )
        .map_err(Into::into);
    }

    let backend = registry
        .open(&configured, &mut config)
        .map_err(|err| match err {
            BoomError::BackendNotFound(name) => BoomError::Config(format!(
                "unknown storage backend '{name}', run `boom switch <storage>`"
            )),
            other => other,
        })
        .with_context(|| format!("Failed to open the '{configured}' storage backend"))?;

    let mut storage = Storage::load(backend.as_ref())
        .with_context(|| format!("Refusing to continue; fix or move your {} data", backend.name()))?;

    let platform = SystemPlatform::new(config.editor.clone());
    let mut session = Session {
        storage: &mut storage,
        backend: backend.as_ref(),
        platform: &platform,
        config: &mut config,
        registry: &registry,
        style,
        out: &mut out,
    };

    commands::execute(cli.args, &mut session)?;
    Ok(())
}
