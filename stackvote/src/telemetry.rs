//! Tracing setup for the stackvote application.
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes tracing with an env-filter and console fmt layer.
///
/// `RUST_LOG` overrides the default filter. Call once at startup, before
/// constructing `Dependencies`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stackvote=info,stackvote_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    info!(
        service_name = "stackvote",
        service_version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );
}
