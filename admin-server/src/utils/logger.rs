//! Logging Infrastructure
//!
//! Structured logging via tracing; `RUST_LOG` overrides the default filter.

/// Initialize the tracing subscriber.
///
/// Safe to call once at startup; integration tests that spin up the router
/// directly skip this and let output go nowhere.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_server=info,tower_http=info".into()),
        )
        .init();
}
