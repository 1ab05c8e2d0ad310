use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing stack: a rolling file appender plus a colored
/// stdout layer (text mode only). The returned guard must outlive the run
/// or buffered log lines are dropped.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; otherwise the config level, with the crate target
    // silenced entirely when tracing is disabled.
    let filter_str = if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},bigint_fixgen=off", config.log_level)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let mut layers = Vec::new();
    if config.use_json {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(non_blocking)
                .with_ansi(false)
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(false)
                .with_writer(non_blocking)
                .with_ansi(false)
                .boxed(),
        );
        layers.push(fmt::layer().with_target(false).with_ansi(true).boxed());
    }

    tracing_subscriber::registry().with(filter).with(layers).init();

    guard
}
