//! Tilde entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_state::EditorConfig;
use core_terminal::{CrosstermTerminal, TerminalOutput};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Once;
use tilde::{EXIT_FAILURE, EditorRuntime, ShutdownReason};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tilde", version, about = "Tilde terminal editor shell")]
struct Args {
    /// Do not draw the welcome banner.
    #[arg(long)]
    no_banner: bool,
    /// Clear the whole screen before every frame.
    #[arg(long)]
    full_clear: bool,
    /// Keep the terminal cursor parked at the top-left cell.
    #[arg(long)]
    no_cursor_tracking: bool,
    /// Consecutive input read failures tolerated before exiting (0 = unlimited).
    #[arg(long, value_name = "N", default_value_t = EditorConfig::default().max_read_errors)]
    max_read_errors: u32,
}

impl Args {
    fn into_config(self) -> EditorConfig {
        EditorConfig {
            banner: !self.no_banner,
            full_clear: self.full_clear,
            cursor_tracking: !self.no_cursor_tracking,
            max_read_errors: self.max_read_errors,
            ..EditorConfig::default()
        }
    }
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("tilde.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "tilde.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global tracing subscriber already installed; drop guard so writer shuts down.
        Err(_err) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(config: EditorConfig) -> Result<ShutdownReason> {
    config.log_effective();
    #[cfg(unix)]
    let _signals = core_terminal::SignalRestore::crossterm().context("install signal handlers")?;
    let out = TerminalOutput::stdout().context("open terminal output")?;
    let mut runtime = EditorRuntime::start(CrosstermTerminal::new(), io::stdin().lock(), out, config)?;
    runtime.run()
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    match run(args.into_config()) {
        Ok(reason) => {
            info!(target: "runtime", %reason, "exit");
            ExitCode::from(reason.exit_code())
        }
        Err(err) => {
            error!(target: "runtime", error = %format!("{err:#}"), "fatal");
            eprintln!("tilde: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
