//! # Tenantpress Seeder
//!
//! Clears the content tables of the tenantpress database and inserts the
//! demonstration data set. Exits with status 1 if seeding fails.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=sqlite://dev.db cargo run -p tenantpress-seed
//! ```

use std::io::IsTerminal;

use tenantpress_seed::{app, config::Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenantpress_seed=info,tenantpress_shared=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    tracing::info!(
        "Tenantpress seeder v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let outcome = match Config::from_env() {
        Ok(config) => app::run(config).await,
        Err(e) => Err(e.into()),
    };

    // Returning the error prints it to stderr even when RUST_LOG filters it out
    if let Err(e) = &outcome {
        tracing::error!("Seeding failed: {:#}", e);
    }
    outcome.map(|_| ())
}
