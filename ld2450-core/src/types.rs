//! Core types for decoded LD2450 radar readings

use crate::constants::{MAX_TARGETS, TARGET_RECORD_SIZE};
use serde::{Deserialize, Serialize};

/// One tracked object reported by the sensor
///
/// The default value is the invalid all-zero record, the sensor's
/// convention for "no target in this slot".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Target {
    /// Whether this slot is tracking anything
    pub valid: bool,

    /// Horizontal position in millimetres, signed
    pub x: i16,

    /// Forward position in millimetres, signed
    pub y: i16,

    /// Radial speed in the sensor's signed velocity unit
    pub speed: i16,

    /// Distance from the sensor in millimetres
    ///
    /// Never transmitted on the wire; always recomputed as
    /// round(sqrt(x² + y²)).
    pub distance: u16,
}

impl Target {
    /// Build a target from raw coordinates, deriving distance and validity
    pub fn from_coordinates(x: i16, y: i16, speed: i16) -> Self {
        Self {
            valid: !(x == 0 && y == 0 && speed == 0),
            x,
            y,
            speed,
            distance: distance_mm(x, y),
        }
    }

    /// Decode one 6-byte wire record: x, y, speed as i16 little-endian
    pub fn decode(record: &[u8; TARGET_RECORD_SIZE]) -> Self {
        let x = i16::from_le_bytes([record[0], record[1]]);
        let y = i16::from_le_bytes([record[2], record[3]]);
        let speed = i16::from_le_bytes([record[4], record[5]]);
        Self::from_coordinates(x, y, speed)
    }
}

/// Rounded Euclidean distance of a point from the sensor origin, in millimetres
///
/// Integer arithmetic only so results are exact and identical with and
/// without std: round(sqrt(s)) bumps the floor root once the remainder
/// passes the midpoint.
fn distance_mm(x: i16, y: i16) -> u16 {
    let squared = (i32::from(x) * i32::from(x)) as u32 + (i32::from(y) * i32::from(y)) as u32;
    let root = squared.isqrt();
    let rounded = if squared - root * root > root {
        root + 1
    } else {
        root
    };
    rounded as u16
}

/// The decoded contents of one data frame: all target slots, positional
///
/// Slot index corresponds to the sensor's physical target channel; slots
/// are never compacted. The whole set is produced atomically per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetFrame {
    /// Target slots, indexed by physical target channel
    pub targets: [Target; MAX_TARGETS],
}

impl TargetFrame {
    /// Number of slots currently tracking something
    pub fn valid_count(&self) -> usize {
        self.targets.iter().filter(|t| t.valid).count()
    }

    /// The slot at `index`, or the default invalid record when out of range
    pub fn get(&self, index: usize) -> Target {
        self.targets.get(index).copied().unwrap_or_default()
    }

    /// Iterate over the slots that are tracking something
    pub fn iter_valid(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_rounded() {
        // sqrt(100² + 50²) = 111.80, rounds up
        assert_eq!(Target::from_coordinates(100, 50, 10).distance, 112);
        // sqrt(20² + 30²) = 36.06, rounds down
        assert_eq!(Target::from_coordinates(-20, 30, -5).distance, 36);
        assert_eq!(Target::from_coordinates(3, 4, 0).distance, 5);
        assert_eq!(Target::from_coordinates(0, 0, 1).distance, 0);
    }

    #[test]
    fn test_distance_extremes() {
        // Worst case: both coordinates at i16::MIN still fits u16
        assert_eq!(
            Target::from_coordinates(i16::MIN, i16::MIN, 0).distance,
            46341
        );
    }

    #[test]
    fn test_all_zero_record_is_invalid() {
        assert!(!Target::from_coordinates(0, 0, 0).valid);
        assert!(Target::from_coordinates(0, 0, 1).valid);
        assert!(Target::from_coordinates(1, 0, 0).valid);
        assert!(Target::from_coordinates(0, -1, 0).valid);
    }

    #[test]
    fn test_decode_little_endian_record() {
        let record = [0x64, 0x00, 0x32, 0x00, 0xF6, 0xFF];
        let target = Target::decode(&record);
        assert_eq!(target.x, 100);
        assert_eq!(target.y, 50);
        assert_eq!(target.speed, -10);
        assert!(target.valid);
    }

    #[test]
    fn test_frame_get_out_of_range() {
        let frame = TargetFrame::default();
        assert_eq!(frame.get(MAX_TARGETS), Target::default());
        assert_eq!(frame.valid_count(), 0);
    }
}
