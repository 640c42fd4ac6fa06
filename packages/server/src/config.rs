//! Server configuration, parsed from command line arguments and environment variables.

use clap::Parser;

use crate::domain::HistoryLimit;

#[derive(Parser, Debug, Clone)]
#[command(name = "tsudoi-server")]
#[command(about = "Ephemeral in-memory group chat server", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Number of chat events kept in the shared history (at least 1)
    #[arg(long, env = "HISTORY_LIMIT", default_value = "100")]
    pub history_limit: HistoryLimit,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
