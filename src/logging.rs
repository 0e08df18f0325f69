use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "codecollab_api=info,tower_http=info";

/// Install the global fmt subscriber on stderr, keeping stdout free for
/// CLI output. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
