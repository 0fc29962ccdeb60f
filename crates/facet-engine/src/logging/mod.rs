//! Logger initialization.
//!
//! Centralizes setup of the `log` facade with an `env_logger` backend; the
//! rest of the crate only ever uses the facade macros.

mod init;

pub use init::{LoggingConfig, init_logging};
