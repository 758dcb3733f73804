use std::path::PathBuf;

use clap::Parser;

/// Chatbar: replay pointer and keyboard input against the navigation sidebar.
#[derive(Parser, Debug)]
#[command(name = "chatbar", version, about)]
pub struct Args {
    /// JSON event script to replay.
    pub script: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of chat sessions in the session list.
    #[arg(long, default_value_t = 5)]
    pub sessions: usize,

    /// Initial viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    pub viewport_width: u32,

    /// Write the resulting config back to disk.
    #[arg(long)]
    pub save: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
