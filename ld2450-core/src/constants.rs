//! Constants and limits for the LD2450 frame format

/// Frame header - 4 bytes for synchronization, first byte transmitted first
pub const FRAME_HEADER: &[u8; 4] = &[0xFD, 0xFC, 0xFB, 0xFA];

/// Size of the little-endian payload length field following the header
pub const LENGTH_FIELD_SIZE: usize = 2;

/// Bytes preceding the payload: header plus length field
pub const FRAME_OVERHEAD: usize = 4 + LENGTH_FIELD_SIZE;

/// Number of target slots the sensor reports in every data frame
pub const MAX_TARGETS: usize = 3;

/// Encoded size of one target record: x, y and speed as i16 little-endian
pub const TARGET_RECORD_SIZE: usize = 6;

/// Payload bytes required for a frame to carry all target slots
pub const MIN_PAYLOAD_SIZE: usize = MAX_TARGETS * TARGET_RECORD_SIZE;

/// Capacity of the stream decoder's accumulation buffer
pub const FRAME_BUFFER_SIZE: usize = 128;

/// Largest total frame size (header + length field + payload) the decoder accepts
///
/// Anything larger could never fit the accumulation buffer, so a length
/// field declaring more than this is treated as corruption.
pub const MAX_FRAME_SIZE: usize = FRAME_BUFFER_SIZE;
