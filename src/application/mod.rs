pub mod default_logger;

pub use default_logger::*;
