// Cargo (payload) encode/decode shared across application data variants
// Decoded cargo yields a PayloadSize and a Payload field; the CRC-16
// trailer is checked on decode.

use super::crc::{append_crc16, verify_crc16};
use super::traits::{CodecError, CodecResult};
use crate::bitwise::parse_decimal;
use crate::core::{
    AppFields, CodecConfig, FieldValue, CRC_BYTES, PAYLOAD_LABEL, PAYLOAD_SIZE_LABEL,
};

/// Append the fields carried by `cargo` and verify its CRC-16 trailer
///
/// The fields are appended before the CRC check, so on `CargoCorrupted`
/// the collection still holds the received (suspect) payload.
pub fn cargo_decode(config: &CodecConfig, cargo: &[u8], fields: &mut AppFields) -> CodecResult<()> {
    if cargo.len() < CRC_BYTES {
        return Err(CodecError::CargoTooShort {
            size: cargo.len(),
            min: CRC_BYTES,
        });
    }

    let payload = &cargo[..cargo.len() - CRC_BYTES];
    fields.add_field(PAYLOAD_SIZE_LABEL, cargo.len().to_string());
    fields.add_blob(PAYLOAD_LABEL, payload);

    if let Err((computed, received)) = verify_crc16(cargo, config.crc_seed) {
        tracing::warn!(
            "Cargo CRC failed: computed {:#06x}, received {:#06x} ({} bytes)",
            computed,
            received,
            cargo.len()
        );
        return Err(CodecError::CargoCorrupted { computed, received });
    }

    tracing::debug!("Decoded cargo of {} bytes", cargo.len());
    Ok(())
}

/// Build the cargo bytes from the PayloadSize and Payload fields
///
/// An explicit PayloadSize wins over the payload length; the payload is
/// truncated or zero-padded to it. A size of 0 is a valid empty cargo.
/// With `append_crc_on_encode` the trailer is added (empty cargo included)
/// and counts against `max_packet_cargo_size`.
pub fn cargo_encode(config: &CodecConfig, fields: &AppFields) -> CodecResult<Vec<u8>> {
    let trailer = if config.append_crc_on_encode { CRC_BYTES } else { 0 };

    let explicit_size = match fields.value_of(PAYLOAD_SIZE_LABEL) {
        Some(value) => Some(parse_payload_size(value)?),
        None => None,
    };

    let payload = fields.value_of(PAYLOAD_LABEL);
    let cargo_size = match (explicit_size, payload) {
        (Some(size), _) => size,
        (None, Some(value)) => value.len(),
        (None, None) => return Err(CodecError::FieldsMissing),
    };

    if cargo_size == 0 {
        return Ok(finish(config, Vec::new()));
    }

    let payload = payload.ok_or(CodecError::FieldsMissing)?;

    let framed_size = cargo_size.saturating_add(trailer);
    if framed_size > config.max_packet_cargo_size {
        return Err(CodecError::CargoSize {
            size: framed_size,
            max: config.max_packet_cargo_size,
        });
    }

    let mut cargo = vec![0u8; cargo_size];
    let bytes = payload.as_bytes();
    let copied = bytes.len().min(cargo_size);
    cargo[..copied].copy_from_slice(&bytes[..copied]);

    let cargo = finish(config, cargo);

    tracing::debug!(
        "Encoded cargo of {} bytes (payload {} bytes)",
        cargo.len(),
        bytes.len()
    );
    Ok(cargo)
}

fn finish(config: &CodecConfig, cargo: Vec<u8>) -> Vec<u8> {
    if config.append_crc_on_encode {
        append_crc16(&cargo, config.crc_seed)
    } else {
        cargo
    }
}

fn parse_payload_size(value: &FieldValue) -> CodecResult<usize> {
    value
        .as_text()
        .and_then(parse_decimal)
        .and_then(|size| usize::try_from(size).ok())
        .ok_or_else(|| CodecError::FieldParse {
            label: PAYLOAD_SIZE_LABEL.to_string(),
            value: value.to_string(),
        })
}
