//! Parlor chat room server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server -- --port 5000
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use parlor_server::{
    Server,
    config::{
        DEFAULT_HOST, DEFAULT_INACTIVITY_THRESHOLD, DEFAULT_PORT, DEFAULT_SWEEP_INTERVAL,
        ServerConfig,
    },
};
use parlor_shared::{logger::setup_logger, time::SystemClock};

/// Chat room server
#[derive(Parser, Debug)]
#[command(name = "parlor-server")]
#[command(about = "Chat room server with inactivity sweeping", long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, env = "PARLOR_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind to
    #[arg(short, long, env = "PARLOR_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Seconds between two inactivity sweeps
    #[arg(long, env = "PARLOR_SWEEP_INTERVAL_SECS", default_value_t = DEFAULT_SWEEP_INTERVAL.as_secs())]
    sweep_interval_secs: u64,

    /// Seconds of silence after which a participant is swept
    #[arg(long, env = "PARLOR_INACTIVITY_THRESHOLD_SECS", default_value_t = DEFAULT_INACTIVITY_THRESHOLD.as_secs())]
    inactivity_threshold_secs: u64,

    /// Reject messages from senders that are not registered participants
    #[arg(long, env = "PARLOR_REQUIRE_REGISTERED_SENDER")]
    require_registered_sender: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            sweep_interval: Duration::from_secs(args.sweep_interval_secs),
            inactivity_threshold: Duration::from_secs(args.inactivity_threshold_secs),
            require_registered_sender: args.require_registered_sender,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let config = match ServerConfig::from(args).validate() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let server = Server::with_in_memory_store(&config, Arc::new(SystemClock));

    // Run the server
    if let Err(e) = server.run(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
