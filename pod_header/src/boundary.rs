//! The raw-bytes side of the interface.

use tracing::{debug, error, trace};

use crate::{HeaderError, Message, MessageHeader, project_header};

/// An interface that accepts a header only as raw bytes plus a length.
///
/// The length is `bytes.len()`. Implementations must treat any length other
/// than [`MessageHeader::SIZE`] as fatal.
pub trait HeaderBoundary {
    fn receive(&mut self, bytes: &[u8]);
}

/// Boundary that keeps the most recently received header.
///
/// Each call overwrites the previous value. Calls go through `&mut self`, so a
/// shared instance needs external synchronization.
#[derive(Debug, Default)]
pub struct RecordingBoundary {
    last: Option<MessageHeader>,
    received: usize,
}

impl RecordingBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last header received, if any.
    pub fn last_header(&self) -> Option<&MessageHeader> {
        self.last.as_ref()
    }

    /// Number of headers accepted so far.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Pointer-and-length entry point, as a C caller would use it.
    ///
    /// # Safety
    ///
    /// `data` must be null or valid for reads of `size` bytes for the
    /// duration of the call. It need not be aligned.
    ///
    /// # Panics
    ///
    /// If `size != MessageHeader::SIZE`, or if `data` is null.
    pub unsafe fn receive_raw(&mut self, data: *const u8, size: usize) {
        if data.is_null() {
            error!(size, "rejecting null header pointer");
            if size != MessageHeader::SIZE {
                let e = HeaderError::LengthMismatch {
                    expected: MessageHeader::SIZE,
                    found: size,
                };
                panic!("header boundary: {}", e);
            }
            panic!("header boundary: null header pointer");
        }
        let bytes = unsafe { core::slice::from_raw_parts(data, size) };
        self.receive(bytes);
    }
}

impl HeaderBoundary for RecordingBoundary {
    fn receive(&mut self, bytes: &[u8]) {
        trace!(size = bytes.len(), "header bytes received");
        match MessageHeader::from_bytes(bytes) {
            Ok(header) => {
                self.last = Some(header);
                self.received += 1;
            }
            Err(e) => {
                error!(error = %e, "rejecting header");
                panic!("header boundary: {}", e);
            }
        }
    }
}

/// Project `message` into a fresh header and pass its bytes to `boundary`.
pub fn send_message<B: HeaderBoundary + ?Sized>(message: &Message, boundary: &mut B) {
    let header = project_header(message);
    debug!(len = header.len, kind = header.kind, "sending message header");
    boundary.receive(header.as_bytes());
}
