use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging() {
    init_logging_with(crate::utils::consts::LOG_LEVEL);
}

/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logging_with(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::utils::consts::LOG_LEVEL));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stdout)
        .init();
}
