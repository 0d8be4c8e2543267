use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// `MakeWriter` appending to a file that is opened by the first write.
///
/// Nothing touches the filesystem at construction. An open failure is returned
/// from that write, which `tracing-subscriber` reports on stderr; the next
/// event tries to open again.
#[derive(Debug)]
pub struct AppendFileWriter {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl AppendFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), file: Mutex::new(None) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", self.path.display(), e)))
    }
}

pub struct AppendFileGuard<'a> {
    sink: &'a AppendFileWriter,
}

impl Write for AppendFileGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .sink
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if file.is_none() {
            *file = Some(self.sink.open()?);
        }
        // One formatted event per call, written whole so concurrent lines never interleave.
        let result = match file.as_mut() {
            Some(f) => f.write_all(buf),
            None => Ok(()),
        };
        if result.is_err() {
            *file = None;
        }
        result.map(|()| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .sink
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        match file.as_mut() {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for AppendFileWriter {
    type Writer = AppendFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        AppendFileGuard { sink: self }
    }
}
