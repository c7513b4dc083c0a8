use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the repository list.
    #[arg(short, long, default_value = "./config.json")]
    pub config: PathBuf,

    /// Seconds between ticks.
    #[arg(short, long, default_value_t = 60)]
    pub interval: u64,

    /// Run a single tick and exit (for external schedulers).
    #[arg(long)]
    pub once: bool,
}
