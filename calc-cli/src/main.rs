use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

mod config;
mod logging;
mod session;

use config::CalcConfig;
use session::Session;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Four-function calculator.
///
/// Presses the given buttons in order and prints what the display shows.
/// Buttons: 0-9 . + - x ÷ = % +/- AC
#[derive(Debug, Parser)]
#[command(name = "calc", version, about, long_about = None)]
struct Cli {
    /// Buttons to press, e.g. `3 + 3 x 3 =`.
    #[arg(allow_hyphen_values = true)]
    buttons: Vec<String>,

    /// Read buttons from stdin, one line at a time, until a blank line.
    #[arg(short, long, conflicts_with = "buttons")]
    interactive: bool,

    /// Print the full calculator state instead of only the display.
    #[arg(long)]
    show_state: bool,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug` or `warn,calc_core=trace`).
    /// `RUST_LOG` takes precedence when set.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CalcConfig::load(cli.config.as_deref())?;
    let filter = config.effective_filter(cli.log_level.as_deref());
    logging::init_logging(filter, config.log_file.as_deref())?;
    debug!(?config, "configuration loaded");

    let show_state = cli.show_state || config.show_state;
    let mut session = Session::new();

    if cli.interactive {
        let stdin = io::stdin();
        return session.run_lines(stdin.lock(), io::stdout().lock(), show_state);
    }

    session
        .press_tokens(&cli.buttons)
        .context("cannot press buttons")?;
    debug!(state = ?session.state(), "final state");
    println!("{}", session.render(show_state)?);

    Ok(())
}
