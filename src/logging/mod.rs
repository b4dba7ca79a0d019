//! Logger bootstrap (`log` + `env_logger`).

mod init;

pub use init::{LoggingConfig, init_logging};
