mod macros;

pub mod adapters;
pub mod application;
pub mod common;
pub mod config;
pub mod domains;

pub use config::LoggerConfig;

pub use common::*;

pub use application::default_logger::{default_logger, default_pattern, install_default_logger, select_sink};

pub use domains::*;

#[doc(hidden)]
pub use tracing;
