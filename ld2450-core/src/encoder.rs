//! Synthetic frame construction
//!
//! The decoder core never talks back to the sensor; these builders exist
//! so tests, benches and the capture synthesizer can produce bit-exact
//! sensor frames to feed through the decoding path.

use crate::constants::{FRAME_HEADER, FRAME_OVERHEAD, MAX_TARGETS, MIN_PAYLOAD_SIZE};
use crate::error::FrameError;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

/// Builder for one synthetic data frame
///
/// ```
/// use ld2450_core::encoder::FrameBuilder;
///
/// let frame = FrameBuilder::new()
///     .slot(100, 50, 10)
///     .slot(-20, 30, -5)
///     .build()
///     .unwrap();
/// assert_eq!(frame.len(), 24);
/// assert_eq!(&frame[..4], &[0xFD, 0xFC, 0xFB, 0xFA]);
/// ```
#[derive(Debug, Default)]
pub struct FrameBuilder {
    slots: Vec<(i16, i16, i16)>,
}

impl FrameBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target slot as raw (x, y, speed) coordinates
    pub fn slot(mut self, x: i16, y: i16, speed: i16) -> Self {
        self.slots.push((x, y, speed));
        self
    }

    /// Encode the frame
    ///
    /// Unfilled slots encode as the all-zero empty record; the payload
    /// always carries every slot, so the length field is constant.
    pub fn build(self) -> Result<Bytes, FrameError> {
        if self.slots.len() > MAX_TARGETS {
            return Err(FrameError::TooManyTargets(self.slots.len()));
        }

        let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD + MIN_PAYLOAD_SIZE);
        buf.put_slice(FRAME_HEADER);
        buf.put_u16_le(MIN_PAYLOAD_SIZE as u16);

        for i in 0..MAX_TARGETS {
            let (x, y, speed) = self.slots.get(i).copied().unwrap_or((0, 0, 0));
            buf.put_i16_le(x);
            buf.put_i16_le(y);
            buf.put_i16_le(speed);
        }

        Ok(buf.freeze())
    }
}

/// Encode a frame from a slice of (x, y, speed) coordinates
pub fn encode_frame(slots: &[(i16, i16, i16)]) -> Result<Bytes, FrameError> {
    let mut builder = FrameBuilder::new();
    for &(x, y, speed) in slots {
        builder = builder.slot(x, y, speed);
    }
    builder.build()
}
