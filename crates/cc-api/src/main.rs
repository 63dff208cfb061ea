//! Community Connect API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p cc-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use cc_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {e}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Community Connect API server"
    );

    if let Err(e) = cc_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
