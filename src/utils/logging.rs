//! Logger setup

use env_logger::Env;

/// Install the `env_logger` backend; `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    // A second call (tests, embedding) keeps the first logger.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}
