use std::sync::Once;

/// Where log records are written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogOutput {
    /// Frame-rate and error lines are part of the program's normal output.
    #[default]
    Stdout,
    Stderr,
}

impl LogOutput {
    fn target(self) -> env_logger::Target {
        match self {
            LogOutput::Stdout => env_logger::Target::Stdout,
            LogOutput::Stderr => env_logger::Target::Stderr,
        }
    }
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "backend=debug,tile_monitor=info"). When unset, `RUST_LOG` is consulted
/// and the level falls back to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            output: LogOutput::Stdout,
        }
    }
}

static INIT: Once = Once::new();

fn builder(config: LoggingConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }

    builder
        .write_style(config.write_style)
        .target(config.output.target());
    builder
}

/// Installs the global logger on the first call; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // a test harness may have installed a logger already
        if builder(config).try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_go_to_stdout_by_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.output, LogOutput::Stdout);
        assert!(matches!(config.output.target(), env_logger::Target::Stdout));
        assert!(matches!(
            LogOutput::Stderr.target(),
            env_logger::Target::Stderr
        ));
    }

    #[test]
    fn explicit_filter_is_applied() {
        let logger = builder(LoggingConfig {
            env_filter: Some("warn".to_string()),
            ..LoggingConfig::default()
        })
        .build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig {
            env_filter: Some("debug".to_string()),
            write_style: env_logger::WriteStyle::Never,
            output: LogOutput::Stdout,
        });
        init_logging(LoggingConfig::default());
        log::info!("still alive");
    }
}
