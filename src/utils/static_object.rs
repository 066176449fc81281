use std::env;
use std::net::SocketAddr;
use std::sync::LazyLock;

use tracing::{info, warn};

use crate::utils::constant::DEFAULT_BIND_ADDR;

/// Address the HTTP server listens on
///
/// # Environment Variables
///
/// - `BIND_ADDR` - Socket address such as `127.0.0.1:3000`. Falls back to
///   [`DEFAULT_BIND_ADDR`] when missing or unparsable.
pub static BIND_ADDR: LazyLock<SocketAddr> = LazyLock::new(|| {
    let Ok(raw) = env::var("BIND_ADDR") else {
        info!("Missing BIND_ADDR env var, using fallback '{DEFAULT_BIND_ADDR}'");
        return DEFAULT_BIND_ADDR;
    };

    raw.parse().unwrap_or_else(|e| {
        warn!(%raw, error = %e, "Invalid BIND_ADDR env var, using fallback '{DEFAULT_BIND_ADDR}'");
        DEFAULT_BIND_ADDR
    })
});

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, colored lines
    Pretty,
    /// One bunyan-style JSON object per line
    Json,
}

impl LogFormat {
    /// Parses a `LOG_FORMAT` value, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" | "bunyan" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Log format selected by the `LOG_FORMAT` env variable
///
/// Read before the subscriber is installed, so fallbacks are reported on stderr.
pub static LOG_FORMAT: LazyLock<LogFormat> = LazyLock::new(|| match env::var("LOG_FORMAT") {
    Ok(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
        eprintln!("Invalid LOG_FORMAT env var '{raw}', using fallback 'pretty'");
        LogFormat::Pretty
    }),
    Err(_) => LogFormat::Pretty,
});
