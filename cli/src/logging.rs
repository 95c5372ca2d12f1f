//! Log setup for `xrpl-cli`. Command output owns stdout, so every log line goes to
//! stderr, either as text or as one JSON object per line (`--log-format json`).
//! A set `RUST_LOG` wins over `--log-level`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Human,
    Json,
}

/// Called once from `main`, before the first request.
pub fn init_logging(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (text, json) = match format {
        LogFormat::Human => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };
    tracing_subscriber::registry().with(filter).with(text).with(json).init();
}
