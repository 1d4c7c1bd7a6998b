// CRC-16 handling for cargo trailers
// JANUS uses the CCITT polynomial 0x1021, MSB first, no final xor.

use crate::bitwise::{read_trailing_u16_be, write_u16_be};
use crate::core::constants::CRC_BYTES;
use ::crc::{Crc, CRC_16_XMODEM};

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// CRC-16 of `data` starting from `seed`
pub fn crc16(data: &[u8], seed: u16) -> u16 {
    let mut digest = CRC16.digest_with_initial(seed);
    digest.update(data);
    digest.finalize()
}

/// Transmitted CRC-16 held in the last two bytes of a cargo (MSB first)
///
/// Buffers too short to hold a trailer read as 0.
pub fn extract_crc16(cargo: &[u8]) -> u16 {
    read_trailing_u16_be(cargo).unwrap_or(0)
}

/// Copy `payload` and append its CRC-16 trailer
pub fn append_crc16(payload: &[u8], seed: u16) -> Vec<u8> {
    let mut cargo = Vec::with_capacity(payload.len() + CRC_BYTES);
    cargo.extend_from_slice(payload);
    cargo.extend_from_slice(&write_u16_be(crc16(payload, seed)));
    cargo
}

/// Check the trailer of `cargo`, returning `(computed, received)` on mismatch
pub fn verify_crc16(cargo: &[u8], seed: u16) -> Result<(), (u16, u16)> {
    let payload_len = cargo.len().saturating_sub(CRC_BYTES);
    let computed = crc16(&cargo[..payload_len], seed);
    let received = extract_crc16(cargo);
    if computed == received {
        Ok(())
    } else {
        Err((computed, received))
    }
}
