//! Diagnostic trace sinks.
//!
//! The solver and cleaner report what they are doing as free-form text
//! events through a [`TraceSink`] injected at construction. The core has
//! no opinion about where events go; it behaves identically whether they
//! land in a file, the log, or nowhere.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

/// Sink for free-form solver diagnostics.
///
/// One operation, one solving session: implementations may allocate their
/// backing resource lazily on the first append and drop it with the sink.
pub trait TraceSink: Debug {
    /// Appends one diagnostic event.
    fn append(&mut self, event: &str);
}

/// Discards every event. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn append(&mut self, _event: &str) {}
}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn append(&mut self, event: &str) {
        log::debug!(target: "ninegrid::trace", "{event}");
    }
}

/// Writes events to a file.
///
/// The file is created lazily on the first append, so a sink that never
/// receives an event never leaves an empty file behind. Tracing must not
/// fail a solve: open or write errors disable the sink after a single
/// warning.
#[derive(Debug)]
pub struct FileTrace {
    path: PathBuf,
    state: FileState,
}

#[derive(Debug)]
enum FileState {
    Unopened,
    Open(BufWriter<File>),
    Disabled,
}

impl FileTrace {
    /// Creates a sink that will write to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: FileState::Unopened,
        }
    }
}

impl TraceSink for FileTrace {
    fn append(&mut self, event: &str) {
        if matches!(self.state, FileState::Unopened) {
            self.state = match File::create(&self.path) {
                Ok(file) => FileState::Open(BufWriter::new(file)),
                Err(err) => {
                    log::warn!("cannot open trace file {}: {err}", self.path.display());
                    FileState::Disabled
                }
            };
        }
        if let FileState::Open(writer) = &mut self.state {
            if writeln!(writer, "{event}").is_err() {
                log::warn!("trace write to {} failed, tracing disabled", self.path.display());
                self.state = FileState::Disabled;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_trace_accepts_events() {
        let mut sink = NoopTrace;
        sink.append("anything");
        sink.append("");
    }

    #[test]
    fn test_file_trace_opens_lazily() {
        let dir = std::env::temp_dir();
        let path = dir.join("ninegrid-trace-lazy-test.log");
        let _ = std::fs::remove_file(&path);

        {
            let _sink = FileTrace::new(&path);
            // No append, no file.
        }
        assert!(!path.exists());

        {
            let mut sink = FileTrace::new(&path);
            sink.append("first event");
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first event\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_trace_survives_unwritable_path() {
        // A directory path cannot be created as a file; the sink must
        // swallow the failure instead of panicking.
        let mut sink = FileTrace::new(std::env::temp_dir());
        sink.append("dropped");
        sink.append("also dropped");
    }
}
