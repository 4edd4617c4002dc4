use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed task tracker CLI.
/// Storage is ./tasks.json in the working directory.
#[derive(Parser)]
#[command(name = "taskcli", version, about = "Daily task management CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
