//! ## spegel-export::channel
//! The transport seam. `RecordSink` is what the session writes to;
//! `UnixChannel` is the production implementation holding the one
//! long-lived connection to the rendezvous socket, and `MemorySink` is the
//! in-process double used when no consumer exists.

use std::cell::RefCell;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Errors from establishing or using the transport channel.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot connect to rendezvous endpoint {path}: {source}")]
    Connect {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Send to consumer failed: {0}")]
    Send(#[from] std::io::Error),
}

/// One-directional sink for encoded telemetry records.
pub trait RecordSink {
    fn send(&mut self, record: &str) -> Result<(), ExportError>;
}

/// Long-lived stream connection to a local rendezvous path.
///
/// Records are written raw, with no length prefix and no terminator; the
/// consumer relies on the transport preserving message boundaries across
/// independent sends. A full outbound buffer blocks the caller.
pub struct UnixChannel {
    stream: UnixStream,
}

impl UnixChannel {
    /// Connects to the rendezvous endpoint. The consumer must already be
    /// listening; there is no retry and no degraded mode.
    pub fn connect<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let stream = UnixStream::connect(path).map_err(|source| ExportError::Connect {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { stream })
    }
}

impl RecordSink for UnixChannel {
    fn send(&mut self, record: &str) -> Result<(), ExportError> {
        self.stream.write_all(record.as_bytes())?;
        Ok(())
    }
}

/// In-process sink collecting records for inspection.
///
/// Clones share the underlying buffer, so a test can keep one handle and
/// hand the other to the session.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Rc<RefCell<Vec<String>>>,
    fail_after: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that starts failing once `n` records were accepted, to
    /// exercise mid-run disconnect handling.
    pub fn failing_after(n: usize) -> Self {
        Self {
            records: Rc::default(),
            fail_after: Some(n),
        }
    }

    pub fn records(&self) -> Vec<String> {
        self.records.borrow().clone()
    }
}

impl RecordSink for MemorySink {
    fn send(&mut self, record: &str) -> Result<(), ExportError> {
        let mut records = self.records.borrow_mut();
        if let Some(limit) = self.fail_after {
            if records.len() >= limit {
                return Err(ExportError::Send(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "consumer went away",
                )));
            }
        }
        records.push(record.to_string());
        Ok(())
    }
}
