use std::path::PathBuf;

use clap::Parser;

/// Word Lookup: a dictionary window that also accepts words over loopback TCP.
#[derive(Parser, Debug)]
#[command(name = "word-lookup", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// `RUST_LOG`-style directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
