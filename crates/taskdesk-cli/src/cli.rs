use clap::Parser;

use crate::config::{OutputFormat, ShellConfig};

/// Interactive office task tracker.
#[derive(Debug, Parser)]
#[command(name = "taskdesk", version, about)]
pub struct Cli {
    /// Print task views as JSON lines instead of text
    #[arg(long)]
    pub json: bool,

    /// Log filter (tracing EnvFilter syntax), logs go to stderr
    #[arg(long = "log", env = "TASKDESK_LOG", default_value = "warn")]
    pub log_filter: String,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            banner: !self.no_banner,
        }
    }
}
