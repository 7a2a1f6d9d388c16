use tracing_subscriber::EnvFilter;

/// filter used when RUST_LOG is not set
pub(crate) fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// installs the global subscriber, RUST_LOG wins over the debug toggle
pub(crate) fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
