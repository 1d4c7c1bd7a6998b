// Mask and field helpers for the 64-bit application data word
// Bit positions for hmask/lmask are counted in bits, bmask is 1-based from the MSB

/// Keep the high `bits` bits of `word`, zero the rest
pub fn hmask(word: u64, bits: u32) -> u64 {
    match bits {
        0 => 0,
        b if b >= 64 => word,
        b => word & (u64::MAX << (64 - b)),
    }
}

/// Keep the low `bits` bits of `word`, zero the rest
pub fn lmask(word: u64, bits: u32) -> u64 {
    match bits {
        0 => 0,
        b if b >= 64 => word,
        b => word & (u64::MAX >> (64 - b)),
    }
}

/// Read the single bit at 1-based position `bit` counted from the MSB
pub fn bmask(word: u64, bit: u32) -> u64 {
    if bit == 0 || bit > 64 {
        return 0;
    }
    (word >> (64 - bit)) & 0x1
}

/// Location of a field inside the application data word
///
/// `shift` is the distance of the field's lowest bit from bit 0 of the word,
/// so a field reads as `(word >> shift) & mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSpan {
    pub shift: u32,
    pub width: u32,
}

impl BitSpan {
    pub const fn new(shift: u32, width: u32) -> Self {
        Self { shift, width }
    }

    /// Offset of the field's first bit counted from the MSB
    pub const fn msb_offset(&self) -> u32 {
        64 - self.shift - self.width
    }

    /// Largest value the span can hold
    pub const fn max_value(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    /// Mask covering the span in place
    pub const fn mask(&self) -> u64 {
        self.max_value() << self.shift
    }

    pub const fn overlaps(&self, other: &BitSpan) -> bool {
        self.mask() & other.mask() != 0
    }

    /// Extract the field value
    pub fn read(&self, word: u64) -> u64 {
        (word >> self.shift) & self.max_value()
    }

    /// Read-modify-write the field, keeping every bit outside the span
    ///
    /// Values wider than the span are cut to the span width; callers that
    /// care check against `max_value` first.
    pub fn write(&self, word: u64, value: u64) -> u64 {
        hmask(word, self.msb_offset())
            | ((value & self.max_value()) << self.shift)
            | lmask(word, self.shift)
    }
}
