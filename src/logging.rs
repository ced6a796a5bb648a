use crate::config::LoggingConfig;
use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging on stderr, plus JSON file output when a log directory is configured.
pub fn init_logging(config: &LoggingConfig) {
    // Respect RUST_LOG if set; otherwise use the configured level for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("surf_scraper={},warn", config.level)));

    // stdout carries the table preview, so console logs go to stderr
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let file_layer = config.directory.as_deref().and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Could not create log directory '{}': {}", dir, e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, "surf_scraper.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        // Keep the guard alive for the whole process so buffered logs are flushed
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();
}
