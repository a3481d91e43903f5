use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sendmail2file::config::{load_config, resolve, FILE_ENV};
use sendmail2file::delivery::deliver;

const DEFAULT_LOG: &str = "sendmail2file=info,s2f_record=info,s2f_message=info";

/// Append the email read on stdin to a JSON Lines file.
///
/// Meant to be used as a sendmail-compatible pipe target by a mail
/// transfer agent.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    /// File to save the email to (overrides the config file and $SENDMAIL2FILE_FILE)
    file: Option<PathBuf>,

    #[clap(short, long, env = "SENDMAIL2FILE_CONFIG")]
    /// Config file (default is $HOME/.sendmail2file.toml)
    config: Option<PathBuf>,

    #[clap(long)]
    /// fsync the file before reporting success
    sync: bool,

    /// Recipients, as passed by a sendmail-style caller; ignored
    #[clap(hide = true)]
    recipients: Vec<String>,
}

fn tracer() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    // Abort on panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("{}", panic_info);
        eprintln!("{:?}", backtrace::Backtrace::new());
        std::process::abort();
    }));

    tracer();

    let args = Args::parse();
    tracing::debug!(recipients = ?args.recipients, "invoked");

    let home = std::env::var_os("HOME").map(PathBuf::from);
    let config = load_config(args.config, home.as_deref())?;
    let delivery = resolve(args.file, args.sync, config, std::env::var_os(FILE_ENV));

    let stdin = std::io::stdin();
    deliver(&delivery, stdin.lock())
        .with_context(|| format!("email not saved to {}", delivery.file.display()))?;

    Ok(())
}
