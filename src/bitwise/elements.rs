// Fixed-width element reading and writing for cargo trailers

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ElementError {
    #[error("Insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ElementError>;

/// Read a u16 in big-endian format from the start of `data`
pub fn read_u16_be(data: &[u8]) -> Result<u16> {
    if data.len() < 2 {
        return Err(ElementError::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    Ok(u16::from_be_bytes([data[0], data[1]]))
}

/// Read the trailing u16 (big-endian) of `data`
pub fn read_trailing_u16_be(data: &[u8]) -> Result<u16> {
    if data.len() < 2 {
        return Err(ElementError::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    read_u16_be(&data[data.len() - 2..])
}

/// Write a u16 in big-endian format
pub fn write_u16_be(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}
