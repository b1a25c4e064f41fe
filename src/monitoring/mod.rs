//! Monitoring Module
//!
//! Provides observability for plugrun:
//! - Structured logging

pub mod logging;

pub use logging::{init_logging, LogFormat, LogLevel, LoggerConfig};
