//=========================================================================
// Logging
//=========================================================================
//
// One-time `env_logger` setup for binaries embedding the shell.
//
// The library itself only uses the `log` facade; nothing is printed until
// a binary calls `init_logging`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Once;

//=== LoggingConfig =======================================================

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "proscenium=debug,platform=trace"). When absent, `RUST_LOG` is used, then
/// `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

//=== init_logging ========================================================

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("Logging initialized"),
            Err(err) => log::debug!("Logger already installed: {}", err),
        }
    });
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_defers_to_environment() {
        let config = LoggingConfig::default();
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn with_filter_sets_filter() {
        let config = LoggingConfig::with_filter("proscenium=trace");
        assert_eq!(config.env_filter.as_deref(), Some("proscenium=trace"));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::with_filter("warn"));
        assert_eq!(log::max_level(), log::LevelFilter::Warn);

        init_logging(LoggingConfig::with_filter("trace"));
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
    }
}
