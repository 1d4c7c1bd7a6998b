// Cargo size class table
// A desired cargo length maps to a compact index stored in the low byte of
// the application data word and to the padded length sent on the wire.

use crate::core::constants::MAX_TABLE_CARGO_SIZE;

/// Size class of a cargo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClass {
    pub index: u8,
    /// Padded cargo length sent on the wire
    pub encoded_size: usize,
}

/// Look up the size class for a desired cargo length
///
/// Sizes 0-2 are sent as is, 3-4 are padded to 4, and 5-480 are rounded up
/// to the 8-byte block that contains `desired_size - 1`, plus one block.
/// Larger sizes exhaust the table and yield `None`.
pub fn lookup_size(desired_size: usize) -> Option<SizeClass> {
    let class = match desired_size {
        0..=2 => SizeClass {
            index: desired_size as u8,
            encoded_size: desired_size,
        },
        3..=4 => SizeClass {
            index: 3,
            encoded_size: 4,
        },
        5..=MAX_TABLE_CARGO_SIZE => {
            let encoded_size = ((desired_size - 1) & !0x7) + 8;
            SizeClass {
                index: (4 + (encoded_size - 8) / 8) as u8,
                encoded_size,
            }
        }
        _ => return None,
    };
    Some(class)
}

/// Padded cargo length for a desired size, 0 when the table is exhausted
pub fn encoded_cargo_size(desired_size: usize) -> usize {
    lookup_size(desired_size).map_or(0, |class| class.encoded_size)
}

/// Map a received index to its table index
///
/// Identity for this variant; variants that reserve low codes for framing
/// overhead offset the index here.
pub fn cargo_lookup_index(index: u32) -> u32 {
    index
}

/// Encoded cargo length announced by a size class index
pub fn encoded_size_for_index(index: u32) -> Option<usize> {
    match index {
        0..=2 => Some(index as usize),
        3 => Some(4),
        4..=63 => Some((index as usize - 3) * 8),
        _ => None,
    }
}
