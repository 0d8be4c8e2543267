pub mod logger;
pub mod pattern;
pub mod sink;

pub use logger::Logger;
pub use pattern::PatternFormat;
pub use sink::{LogSink, SinkTarget};
