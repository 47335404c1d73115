//! Offline capture scanning
//!
//! Post-mortem analysis of a recorded byte capture: locate every
//! decodable frame regardless of interleaved noise, with optional
//! statistics. For live byte streams use [`crate::stream::StreamDecoder`].

use crate::constants::FRAME_HEADER;
use crate::decoder::{declared_frame_size, decode_frame, find_header};
use crate::error::FrameError;
use crate::types::TargetFrame;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// A frame found at a specific offset in a capture
#[derive(Debug, Clone)]
pub struct LocatedFrame {
    /// Byte offset of the frame header in the capture
    pub offset: usize,

    /// The decoded target slots
    pub frame: TargetFrame,

    /// Total size of the frame in bytes
    pub size: usize,
}

/// Scan statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,

    /// Number of header signatures found
    pub headers_found: usize,

    /// Number of frames that decoded successfully
    pub frames_found: usize,

    /// Number of decode failures at a header position
    pub decode_failures: usize,

    /// Total bytes recovered (sum of all decoded frame sizes)
    pub bytes_recovered: usize,
}

impl ScanStats {
    /// Calculate recovery rate as a percentage
    pub fn recovery_rate(&self) -> f64 {
        if self.bytes_scanned == 0 {
            0.0
        } else {
            (self.bytes_recovered as f64 / self.bytes_scanned as f64) * 100.0
        }
    }
}

/// Scan a capture for valid frames, even if the capture is damaged
///
/// Searches for the header signature, strict-decodes at each hit, jumps
/// past decoded frames and steps over the 4-byte header on failure.
/// Frames survive corruption at the start of the capture, between
/// frames, or inside neighbouring frames.
pub fn scan_stream(data: &[u8]) -> Vec<LocatedFrame> {
    scan_stream_with_stats(data).0
}

/// Scan a capture, also reporting statistics
pub fn scan_stream_with_stats(data: &[u8]) -> (Vec<LocatedFrame>, ScanStats) {
    let mut stats = ScanStats {
        bytes_scanned: data.len(),
        ..Default::default()
    };

    let mut results = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let Some(rel) = find_header(&data[pos..]) else {
            break;
        };
        let at = pos + rel;
        stats.headers_found += 1;

        match try_decode_at(data, at) {
            Ok(located) => {
                #[cfg(feature = "logging")]
                debug!(offset = at, size = located.size, "decoded frame");
                stats.bytes_recovered += located.size;
                pos = at + located.size;
                results.push(located);
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                debug!(offset = at, error = ?_e, "decode failed, stepping past header");
                stats.decode_failures += 1;
                pos = at + FRAME_HEADER.len();
            }
        }
    }

    stats.frames_found = results.len();

    (results, stats)
}

/// Try to strict-decode a frame at a specific offset
fn try_decode_at(data: &[u8], offset: usize) -> Result<LocatedFrame, FrameError> {
    let size = declared_frame_size(&data[offset..])?;
    if offset + size > data.len() {
        return Err(FrameError::IncompleteFrame {
            expected: size,
            actual: data.len() - offset,
        });
    }

    let frame = decode_frame(&data[offset..offset + size])?;

    Ok(LocatedFrame {
        offset,
        frame,
        size,
    })
}
