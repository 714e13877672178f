//! Logging Setup
//! tracing subscriber for the desktop app.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Console logging; `RUST_LOG` overrides the default `tourism_viz=info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tourism_viz=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}
