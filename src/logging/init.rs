use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "info",
/// "quadrille=trace,wgpu=warn"). When unset, `RUST_LOG` applies, then a
/// warn-level default.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; subsequent calls are ignored.
///
/// Hosts that install their own `log` backend can skip this entirely — the
/// crate only ever emits through the `log` facade.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // Quiet default for a library; hosts opt in to more.
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
