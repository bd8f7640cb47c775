//! Command-line inspector for `folio-epub`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod command;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Raise the log level (`-v` info, `-vv` debug, `-vvv` trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub commands: command::Commands,
}

impl Cli {
    /// Installs a stderr subscriber; `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
