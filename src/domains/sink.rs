use crate::adapters::outbound::AppendFileWriter;
use std::fmt;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Where a sink's output ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Stderr,
    /// Always opened in append mode.
    File(PathBuf),
    /// Any other `MakeWriter`, labelled for diagnostics.
    Custom(String),
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::Stderr => f.write_str("stderr"),
            SinkTarget::File(path) => write!(f, "file {}", path.display()),
            SinkTarget::Custom(label) => f.write_str(label),
        }
    }
}

/// An output destination handed to the logger: a `tracing-subscriber` writer
/// plus a description of where it goes.
pub struct LogSink {
    target: SinkTarget,
    writer: BoxMakeWriter,
}

impl LogSink {
    pub fn stderr() -> Self {
        Self { target: SinkTarget::Stderr, writer: BoxMakeWriter::new(io::stderr) }
    }

    pub fn append_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            target: SinkTarget::File(path.clone()),
            writer: BoxMakeWriter::new(AppendFileWriter::new(path)),
        }
    }

    pub fn custom<M>(label: impl Into<String>, writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self { target: SinkTarget::Custom(label.into()), writer: BoxMakeWriter::new(writer) }
    }

    pub fn target(&self) -> &SinkTarget {
        &self.target
    }

    pub(crate) fn into_parts(self) -> (SinkTarget, BoxMakeWriter) {
        (self.target, self.writer)
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").field("target", &self.target).finish()
    }
}
