//! Tracing initialization for the composition root.

/// Initialize logging with a safe environment filter: `RUST_LOG` wins when
/// set, otherwise sensible defaults apply.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,forum_api=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
