use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::log_buffer::{LogHandle, LogWriter, global_log, set_global_log};

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    Memory(LogWriter),
    File(Arc<Mutex<File>>),
    Stderr(io::Stderr),
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::Memory(w) => w.write(buf),
            DelegatingInner::File(file) => match file.lock() {
                Ok(mut file) => file.write(buf),
                Err(_) => Ok(buf.len()),
            },
            DelegatingInner::Stderr(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::Memory(w) => w.flush(),
            DelegatingInner::File(file) => match file.lock() {
                Ok(mut file) => file.flush(),
                Err(_) => Ok(()),
            },
            DelegatingInner::Stderr(s) => s.flush(),
        }
    }
}

/// Where formatted events go. `Memory` falls back to stderr when no log
/// ring is installed.
#[derive(Clone, Debug)]
pub enum SubscriberMakeWriter {
    Memory,
    File(Arc<Mutex<File>>),
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match self {
            SubscriberMakeWriter::File(file) => DelegatingInner::File(Arc::clone(file)),
            SubscriberMakeWriter::Memory => match global_log() {
                Some(handle) => DelegatingInner::Memory(handle.writer()),
                None => DelegatingInner::Stderr(io::stderr()),
            },
        };
        DelegatingWriter { inner }
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Events go to `log_file` when given,
/// otherwise to the in-memory log ring. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let _ = set_global_log(LogHandle::default());
    let writer = match log_file {
        Some(path) => SubscriberMakeWriter::File(Arc::new(Mutex::new(open_log_file(path)?))),
        None => SubscriberMakeWriter::Memory,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn file_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.log");
        let file = open_log_file(&path).unwrap();
        let make = SubscriberMakeWriter::File(Arc::new(Mutex::new(file)));
        let mut w = make.make_writer();
        w.write_all(b"hello\n").unwrap();
        w.flush().unwrap();
        drop(w);
        let mut w = make.make_writer();
        w.write_all(b"again\n").unwrap();
        w.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\nagain\n");
    }

    #[test]
    fn init_is_idempotent() {
        init(None).unwrap();
        init(None).unwrap();
        assert!(global_log().is_some());
    }
}
