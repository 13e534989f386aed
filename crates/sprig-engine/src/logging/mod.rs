//! Logger bootstrap for binaries built on the engine.

mod init;

pub use init::{init_logging, resolve_filter, LoggingConfig};
