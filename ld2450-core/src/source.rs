//! Non-blocking byte source contract

use alloc::collections::VecDeque;

/// A sequential byte producer with non-blocking semantics
///
/// The stream decoder never waits on its transport: it asks how many
/// bytes can be read right now and pulls them one at a time. UART
/// drivers, sockets and replayed capture files all fit this shape.
pub trait ByteSource {
    /// Bytes readable right now without blocking
    fn available(&self) -> usize;

    /// Read one available byte; `None` when nothing is pending
    fn read_byte(&mut self) -> Option<u8>;
}

/// The natural in-memory source: feed bytes at the back, the decoder
/// drains from the front.
impl ByteSource for VecDeque<u8> {
    fn available(&self) -> usize {
        self.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

/// Cursor over a borrowed capture, releasing bytes front to back
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wrap a byte slice as a source
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deque_source_drains_in_order() {
        let mut source: VecDeque<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(source.available(), 3);
        assert_eq!(source.read_byte(), Some(1));
        assert_eq!(source.read_byte(), Some(2));
        assert_eq!(source.read_byte(), Some(3));
        assert_eq!(source.read_byte(), None);
        assert_eq!(source.available(), 0);
    }

    #[test]
    fn test_slice_source() {
        let data = [0xFD, 0xFC];
        let mut source = SliceSource::new(&data);
        assert_eq!(source.available(), 2);
        assert_eq!(source.read_byte(), Some(0xFD));
        assert_eq!(source.available(), 1);
        assert_eq!(source.read_byte(), Some(0xFC));
        assert_eq!(source.read_byte(), None);
    }
}
