//! # Product Registry
//!
//! Serves the product registry over HTTP.
//!
//! ```bash
//! RUST_LOG=info cargo run                      # serve on 0.0.0.0:8080, write openapi.yaml
//! cargo run -- --port 9000 --no-openapi        # other port, no document
//! cargo run -- openapi --output openapi.yaml   # only render the document
//! ```

use actor_framework::tracing::setup_tracing;
use clap::Parser;
use product_registry::app::{self, ServeError};
use product_registry::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(?config, "Starting product registry");

    if let Err(e) = app::run(config).await {
        error!(error = %e, "Product registry stopped with an error");
        return Err(e);
    }

    info!("Product registry stopped");
    Ok(())
}
