//! Strict single-frame decoding

use crate::constants::{
    FRAME_HEADER, FRAME_OVERHEAD, MAX_FRAME_SIZE, MIN_PAYLOAD_SIZE, TARGET_RECORD_SIZE,
};
use crate::error::FrameError;
use crate::types::{Target, TargetFrame};

/// Find the earliest occurrence of the frame header in `buf`
pub fn find_header(buf: &[u8]) -> Option<usize> {
    // Fast substring search; memchr dispatches to optimized backends
    memchr::memmem::find(buf, FRAME_HEADER)
}

/// Total frame size declared by the header at the start of `buf`
///
/// Validates the header bytes and reads the little-endian length field;
/// the result counts header, length field and payload. A length field
/// claiming more than [`MAX_FRAME_SIZE`] is reported as corruption.
pub fn declared_frame_size(buf: &[u8]) -> Result<usize, FrameError> {
    if buf.len() < FRAME_OVERHEAD {
        return Err(FrameError::IncompleteFrame {
            expected: FRAME_OVERHEAD,
            actual: buf.len(),
        });
    }

    if &buf[..FRAME_HEADER.len()] != FRAME_HEADER {
        let mut bad = [0u8; 4];
        bad.copy_from_slice(&buf[..4]);
        return Err(FrameError::BadHeader(bad));
    }

    let payload_len = u16::from_le_bytes([buf[4], buf[5]]) as usize;
    let total = payload_len + FRAME_OVERHEAD;
    if total > MAX_FRAME_SIZE {
        return Err(FrameError::FrameTooLarge {
            declared: total,
            capacity: MAX_FRAME_SIZE,
        });
    }

    Ok(total)
}

/// Decode one complete frame into its target slots
///
/// `frame` must start with the header and hold at least the declared
/// total size. A slot whose 6-byte record is cut short stays at the
/// invalid default, but the frame as a whole is rejected unless the
/// payload carried every slot's record and at least one slot is
/// tracking a target. Trailing payload bytes beyond the target records
/// are ignored.
pub fn decode_frame(frame: &[u8]) -> Result<TargetFrame, FrameError> {
    let total = declared_frame_size(frame)?;
    if frame.len() < total {
        return Err(FrameError::IncompleteFrame {
            expected: total,
            actual: frame.len(),
        });
    }

    let payload = &frame[FRAME_OVERHEAD..total];

    let mut decoded = TargetFrame::default();
    for (i, slot) in decoded.targets.iter_mut().enumerate() {
        let start = i * TARGET_RECORD_SIZE;
        let end = start + TARGET_RECORD_SIZE;
        if end > payload.len() {
            // Remaining slots stay at the invalid default.
            break;
        }
        let mut record = [0u8; TARGET_RECORD_SIZE];
        record.copy_from_slice(&payload[start..end]);
        *slot = Target::decode(&record);
    }

    if payload.len() < MIN_PAYLOAD_SIZE {
        return Err(FrameError::PayloadTooShort {
            expected: MIN_PAYLOAD_SIZE,
            actual: payload.len(),
        });
    }
    if decoded.valid_count() == 0 {
        return Err(FrameError::NoValidTargets);
    }

    Ok(decoded)
}
