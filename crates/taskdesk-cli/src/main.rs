mod cli;
mod config;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use taskdesk_core::{SharedTaskStore, TaskStore};

use crate::cli::Cli;
use crate::shell::Shell;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the menu on stdout.
    let filter = EnvFilter::try_new(&cli.log_filter)
        .with_context(|| format!("invalid log filter {:?}", cli.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // One store for the whole session, owned here and handed to the shell.
    let store = SharedTaskStore::new(TaskStore::new());

    let mut shell = Shell::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        store,
        cli.shell_config(),
    );
    shell.run().await
}
