//! Incremental stream decoding with resynchronization
//!
//! [`StreamDecoder`] owns a fixed-capacity accumulation buffer and the
//! most recently decoded set of targets. Every `poll` drains the bound
//! source, extracts all complete frames and recovers from noise by
//! realigning on the frame header. Malformed input never surfaces as an
//! error; the decoder degrades and resynchronizes.

use crate::constants::{FRAME_BUFFER_SIZE, FRAME_OVERHEAD, MAX_TARGETS};
use crate::decoder::{decode_frame, declared_frame_size, find_header};
use crate::source::ByteSource;
use crate::types::{Target, TargetFrame};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Streaming decoder bound to one byte source for its lifetime
#[derive(Debug)]
pub struct StreamDecoder<S> {
    source: S,
    buf: [u8; FRAME_BUFFER_SIZE],
    len: usize,
    targets: TargetFrame,
}

impl<S: ByteSource> StreamDecoder<S> {
    /// Bind a source, starting clean: empty buffer, every slot invalid
    pub fn bind(source: S) -> Self {
        Self {
            source,
            buf: [0; FRAME_BUFFER_SIZE],
            len: 0,
            targets: TargetFrame::default(),
        }
    }

    /// Swap in a new source
    ///
    /// Discards any buffered partial frame and resets every target slot
    /// to the invalid default.
    pub fn rebind(&mut self, source: S) {
        self.source = source;
        self.len = 0;
        self.targets = TargetFrame::default();
    }

    /// The sensor's fixed slot count
    pub fn target_count(&self) -> usize {
        MAX_TARGETS
    }

    /// The slot at `index`, or the default invalid record when out of range
    pub fn target(&self, index: usize) -> Target {
        self.targets.get(index)
    }

    /// The full slot set from the last successfully decoded frame
    pub fn targets(&self) -> &TargetFrame {
        &self.targets
    }

    /// The bound source, e.g. for queueing more bytes
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Drain available bytes and extract every complete frame
    ///
    /// Returns the valid-target count of the last frame decoded during
    /// this call, 0 when none completed. The exported slots keep the
    /// last good reading either way; callers wanting persisted state
    /// read [`StreamDecoder::target`] directly.
    pub fn poll(&mut self) -> usize {
        // Drain only up to remaining capacity; surplus stays queued at
        // the source for a later poll.
        while self.len < FRAME_BUFFER_SIZE {
            match self.source.read_byte() {
                Some(byte) => {
                    self.buf[self.len] = byte;
                    self.len += 1;
                }
                None => break,
            }
        }

        let mut last_valid_count = 0;

        loop {
            let Some(at) = find_header(&self.buf[..self.len]) else {
                // Without a header nothing buffered can start a frame.
                #[cfg(feature = "logging")]
                if self.len > 0 {
                    debug!(discarded = self.len, "no header in buffer, dropping it");
                }
                self.len = 0;
                break;
            };

            if at > 0 {
                // Noise before the frame start.
                #[cfg(feature = "logging")]
                debug!(offset = at, "resynchronizing to header");
                self.consume(at);
                continue;
            }

            if self.len < FRAME_OVERHEAD {
                // Header seen but the length field has not arrived yet.
                break;
            }

            let total = match declared_frame_size(&self.buf[..self.len]) {
                Ok(total) => total,
                Err(_e) => {
                    // Implausible length field. Dropping a single byte
                    // lets the scan walk past this false header without
                    // losing genuine trailing data.
                    #[cfg(feature = "logging")]
                    warn!(error = ?_e, "implausible frame length, dropping one byte");
                    self.consume(1);
                    continue;
                }
            };

            if total > self.len {
                // Complete frame not here yet; wait for more bytes.
                break;
            }

            match decode_frame(&self.buf[..total]) {
                Ok(frame) => {
                    #[cfg(feature = "logging")]
                    debug!(valid = frame.valid_count(), size = total, "decoded frame");
                    last_valid_count = frame.valid_count();
                    self.targets = frame;
                }
                Err(_e) => {
                    // A rejected frame keeps the previous reading exported.
                    #[cfg(feature = "logging")]
                    warn!(error = ?_e, size = total, "rejected frame");
                }
            }

            // Consume the frame whether or not it validated; a rejected
            // frame must not be retried on the same bytes.
            self.consume(total);
        }

        last_valid_count
    }

    fn consume(&mut self, count: usize) {
        debug_assert!(count <= self.len);
        self.buf.copy_within(count..self.len, 0);
        self.len -= count;
    }
}
