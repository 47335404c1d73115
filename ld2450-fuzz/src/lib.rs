//! Fuzzing entry points for the ld2450-core decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run a fuzzer: cargo fuzz run fuzz_decode

use ld2450_core::source::SliceSource;
use ld2450_core::{ByteSource, StreamDecoder};

pub fn fuzz_decode(data: &[u8]) {
    use ld2450_core::decoder::decode_frame;

    // Try to decode - should never panic
    let _ = decode_frame(data);
}

pub fn fuzz_scan(data: &[u8]) {
    use ld2450_core::scanner::scan_stream;

    // Try to scan - should never panic
    let _ = scan_stream(data);
}

pub fn fuzz_poll(data: &[u8]) {
    // Drain arbitrary input through the stream decoder - should never
    // panic and always terminate
    let mut decoder = StreamDecoder::bind(SliceSource::new(data));
    while decoder.source_mut().available() > 0 {
        decoder.poll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_scan_empty() {
        fuzz_scan(&[]);
    }

    #[test]
    fn test_fuzz_scan_random() {
        fuzz_scan(&[0xFF; 1024]);
    }

    #[test]
    fn test_fuzz_poll_header_flood() {
        fuzz_poll(&[0xFD; 4096]);
    }
}
