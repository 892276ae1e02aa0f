//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `-v` flags beat the configured level.
fn directive(cfg: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => cfg.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, overrides everything.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(cfg, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match cfg.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    // A subscriber installed earlier keeps receiving events.
    if let Err(e) = result {
        tracing::warn!(error = %e, "Global tracing subscriber already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_level() {
        let cfg = LoggingConfig {
            level: "warn".to_string(),
            format: LogFormat::Text,
        };
        assert_eq!(directive(&cfg, 0), "warn");
        assert_eq!(directive(&cfg, 1), "info");
        assert_eq!(directive(&cfg, 2), "debug");
        assert_eq!(directive(&cfg, 5), "trace");
    }
}
