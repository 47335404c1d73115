//! # LD2450 Core
//!
//! Streaming decoder for the HLK-LD2450 multi-target radar frame protocol.
//!
//! ## Modules
//!
//! - `constants`: Wire format constants and limits
//! - `types`: Decoded types (Target, TargetFrame)
//! - `decoder`: Strict single-frame decoding
//! - `encoder`: Synthetic frame construction for tests and captures
//! - `source`: Non-blocking byte source contract
//! - `stream`: Incremental stream decoding with resynchronization
//! - `scanner`: Offline capture scanning and recovery

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod scanner;
pub mod source;
pub mod stream;
pub mod types;

// Re-export commonly used types
pub use error::FrameError;
pub use source::ByteSource;
pub use stream::StreamDecoder;
pub use types::{Target, TargetFrame};

/// Result type alias for decoder operations
pub type Result<T> = core::result::Result<T, FrameError>;
