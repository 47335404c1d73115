//! Error types for LD2450 frame operations

/// Errors that can occur while decoding LD2450 frames
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Invalid frame header detected
    #[cfg_attr(
        feature = "std",
        error("Invalid frame header: expected FD FC FB FA, got {0:02X?}")
    )]
    BadHeader([u8; 4]),

    /// Declared frame size exceeds what the decoder can buffer
    #[cfg_attr(
        feature = "std",
        error("Declared frame size {declared} exceeds capacity {capacity}")
    )]
    FrameTooLarge {
        /// Total frame size claimed by the length field.
        declared: usize,
        /// Largest frame the decoder accepts.
        capacity: usize,
    },

    /// Incomplete frame - not enough data
    #[cfg_attr(
        feature = "std",
        error("Incomplete frame: expected {expected} bytes, got {actual}")
    )]
    IncompleteFrame {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually present.
        actual: usize,
    },

    /// Payload does not carry data for every target slot
    #[cfg_attr(
        feature = "std",
        error("Payload too short: expected {expected} bytes, got {actual}")
    )]
    PayloadTooShort {
        /// Payload bytes required for all target slots.
        expected: usize,
        /// Payload bytes actually present.
        actual: usize,
    },

    /// Frame decoded but every slot carried the all-zero empty record
    #[cfg_attr(feature = "std", error("Frame contains no valid targets"))]
    NoValidTargets,

    /// More slots supplied to the frame builder than the sensor reports
    #[cfg_attr(
        feature = "std",
        error("Too many targets: {0} exceeds the sensor's slot count")
    )]
    TooManyTargets(usize),
}
