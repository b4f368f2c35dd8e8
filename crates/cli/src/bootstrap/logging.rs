use ferrous_recursor_domain::config::LogFormat;
use ferrous_recursor_domain::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over `logging.level`; an unusable level falls back to info.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_logging(config: &Config) {
    let registry = tracing_subscriber::registry().with(env_filter(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_ansi(false),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .init(),
    }
}
