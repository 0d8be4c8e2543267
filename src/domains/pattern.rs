//! The RMM line layout as a `tracing-subscriber` event formatter.
//!
//! The pattern flags map onto this formatter as follows: `%6t` is the thread id,
//! right-aligned in six columns; `%H:%M:%S:%f` is local time rendered by
//! chrono's `%H:%M:%S:%6f`; `%-6l` is the level name, left-aligned in six
//! columns; `%v` is the event's fields as rendered by the subscriber's field
//! formatter.

use chrono::Local;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Pattern-flag spelling of the layout, for diagnostics.
pub const DEFAULT_PATTERN: &str = "[%6t][%H:%M:%S:%f][%-6l] %v";

const TIME_FORMAT: &str = "%H:%M:%S:%6f";

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Small process-unique number for the calling thread, assigned on first use.
/// Stable Rust exposes no numeric OS thread id.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warning",
        Level::ERROR => "error",
    }
}

/// Renders `[thread][HH:MM:SS:micros][level ] message`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFormat;

impl PatternFormat {
    pub fn as_str(&self) -> &'static str {
        DEFAULT_PATTERN
    }
}

impl fmt::Display for PatternFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S, N> FormatEvent<S, N> for PatternFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "[{:>6}][{}][{:<6}] ",
            current_thread_id(),
            Local::now().format(TIME_FORMAT),
            level_name(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
