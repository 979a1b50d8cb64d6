use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::debug;

use termcalc_core::{Session, SessionOptions};

/// Interactive four-function console calculator
///
/// Reads two operands and an operator per iteration from stdin and
/// prints the result; enter 'q' in place of the first operand to quit.
#[derive(Parser)]
#[command(name = "termcalc")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    /// Suppress the banner and prompts (useful for piped input)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    debug!(quiet = cli.quiet, "starting calculator session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let options = SessionOptions {
        banner: !cli.quiet,
        prompts: !cli.quiet,
    };

    let mut session = Session::new(stdin.lock(), stdout.lock(), io::stderr(), options);
    session.run()?;

    debug!("session terminated");
    Ok(())
}
