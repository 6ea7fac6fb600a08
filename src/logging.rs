use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Install the global `fmt` subscriber. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn register_logger() {
    let log_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(log_filter).init();
}
