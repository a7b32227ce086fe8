mod backend;
mod config;
mod error;
mod icon;
mod segment;
mod types;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::{QuerySource, SpatialMsg};
use crate::config::{DEFAULT_MSG_PROGRAM, ICON_FONT};
use crate::icon::IconSet;
use crate::segment::{config_lines, window_lines, workspace_lines};

#[derive(Parser, Debug)]
#[command(name = "spatialbar")]
#[command(version, about = "Waybar segments for the spatial window manager")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// IPC client used to query the window manager
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_MSG_PROGRAM)]
    msg_program: String,

    /// Font family wrapped around every glyph
    #[arg(long, global = true, value_name = "FAMILY", default_value = ICON_FONT)]
    font: String,

    /// Log to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Layout of the current workspace
    Config,
    /// Icon, index and focus state of a workspace
    Workspace {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Icon, app id and focus state of a window
    Window {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Whether `arg` names a mode or an option `spatialbar` accepts up front.
fn is_known_first_arg(cmd: &clap::Command, arg: &str) -> bool {
    if let Some(long) = arg.strip_prefix("--") {
        let name = long.split('=').next().unwrap_or_default();
        return matches!(name, "help" | "version")
            || cmd.get_arguments().any(|a| a.get_long() == Some(name));
    }
    if let Some(shorts) = arg.strip_prefix('-') {
        return !shorts.is_empty()
            && shorts.chars().all(|c| {
                matches!(c, 'h' | 'V') || cmd.get_arguments().any(|a| a.get_short() == Some(c))
            });
    }
    cmd.get_subcommands().any(|sub| sub.get_name() == arg)
}

/// `Err(None)` means exit 1 without output: the first argument is not a
/// known mode or option, or no mode was given. Later mistakes keep clap's
/// diagnostic.
fn parse_args(args: Vec<OsString>) -> Result<Cli, Option<clap::Error>> {
    if let Some(first) = args.get(1) {
        if !is_known_first_arg(&Cli::command(), &first.to_string_lossy()) {
            return Err(None);
        }
    }
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(err),
    })
}

fn parse_cli() -> Cli {
    match parse_args(std::env::args_os().collect()) {
        Ok(cli) => cli,
        Err(Some(err)) => err.exit(),
        Err(None) => std::process::exit(1),
    }
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn render(mode: Mode, source: &dyn QuerySource, icons: &IconSet) -> Result<Vec<String>> {
    match mode {
        Mode::Config => config_lines(source, icons).context("render layout segment"),
        Mode::Workspace { index } => workspace_lines(source, icons, index)
            .with_context(|| format!("render workspace {index}")),
        Mode::Window { index } => {
            window_lines(source, icons, index).with_context(|| format!("render window {index}"))
        }
    }
}

fn main() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "starting");

    let source = SpatialMsg::new(cli.msg_program);
    let icons = IconSet::new(cli.font);
    for line in render(cli.mode, &source, &icons)? {
        println!("{line}");
    }
    Ok(())
}
