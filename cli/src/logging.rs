use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes console logging.
///
/// Logs go to stderr so that stdout only carries the extraction result. The
/// default level is "warn" with extraction summaries at "info"; override with
/// RUST_LOG:
/// - RUST_LOG=title_extractor=debug ocr-title cover.txt
/// - RUST_LOG=title_extractor=trace ocr-title --explain cover.txt
pub fn init_logging() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,title_extractor=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
