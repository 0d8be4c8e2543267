use crate::domains::pattern::PatternFormat;
use crate::domains::sink::{LogSink, SinkTarget};
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;

/// A named logging handle: one sink, one pattern, one level, wrapped in a
/// `tracing` dispatcher that is scoped to this logger rather than global.
///
/// Record emission and write errors belong to `tracing-subscriber`. A sink
/// that fails to write (for example a log file whose directory does not
/// exist) is reported by the subscriber on stderr and the event is dropped;
/// nothing is returned to the caller.
#[derive(Debug)]
pub struct Logger {
    name: String,
    target: SinkTarget,
    pattern: PatternFormat,
    level: LevelFilter,
    dispatch: Dispatch,
}

impl Logger {
    pub fn new(name: impl Into<String>, sink: LogSink, pattern: PatternFormat, level: LevelFilter) -> Self {
        let (target, writer) = sink.into_parts();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_max_level(level)
            .event_format(pattern)
            .finish();
        Self {
            name: name.into(),
            target,
            pattern,
            level,
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sink_target(&self) -> &SinkTarget {
        &self.target
    }

    pub fn pattern(&self) -> &PatternFormat {
        &self.pattern
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the current thread's `tracing` dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
