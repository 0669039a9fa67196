use std::path::PathBuf;

use clap::Parser;

use crate::model::view_mode::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "tt", about = concat!("tasktrack v", env!("CARGO_PKG_VERSION"), " - today's tasks at a glance"), version)]
pub struct Cli {
    /// Config file (default: $TASKTRACK_CONFIG, then ./tasktrack.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// View to open with: today, yesterday, week or all
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Start with an empty list instead of the sample task
    #[arg(long)]
    pub no_welcome: bool,

    /// Append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
