use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Play tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe-tui", version)]
pub struct Cli {
    /// Config file (default: <config dir>/tictactoe-tui/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "tictactoe_core=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Flags given on the command line override the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(file) = &self.log_file {
            config.log.file = Some(file.clone());
        }
        if let Some(filter) = &self.log_filter {
            config.log.filter = filter.clone();
        }
    }
}
