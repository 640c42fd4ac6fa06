//! Tsudoi chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tsudoi-server
//! cargo run --bin tsudoi-server -- --host 0.0.0.0 --port 3000 --history-limit 200
//! ```

use clap::Parser;
use tsudoi_server::{config::ServerConfig, ui::Server};
use tsudoi_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(
        env!("CARGO_BIN_NAME"),
        &["tsudoi-server", "tsudoi-shared", "tower-http"],
        &config.log_level,
    );

    tracing::info!(
        "Starting room with a history of {} events",
        config.history_limit.value()
    );
    let server = Server::in_memory(config.history_limit);
    if let Err(e) = server.run(&config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
