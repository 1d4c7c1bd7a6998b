// JANUS Class User Id 016, Application Type 01
// Reference: januswiki "Class User Id: 016 NATO JANUS reference Implementation"
//
// Application data layout (shift from bit 0 / width):
//   Station Identifier       18 / 8
//   Destination Identifier   10 / 8
//   Ack Request               9 / 1
//   Parameter Set Identifier  6 / 12  (encode only)
//   Cargo Size Index          0 / 8

use super::cargo;
use super::size_table::{cargo_lookup_index, lookup_size};
use super::traits::{AppDataCodec, CodecError, CodecResult, EncodedAppData};
use crate::bitwise::{bmask, parse_decimal, BitSpan};
use crate::core::*;

/// Codec for class 016 / application type 01
#[derive(Debug, Clone, Default)]
pub struct Class016App01 {
    config: CodecConfig,
}

impl Class016App01 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Append the decoded fields and return the cargo size index; cannot fail
    pub fn decode_word(&self, app_data: u64, fields: &mut AppFields) -> u32 {
        decode_station_id(app_data, fields);
        decode_destination_id(app_data, fields);
        decode_ack_request(app_data, fields);

        let cargo_size_index = decode_cargo_size_index(app_data);
        tracing::debug!(
            "Decoded app data {:#018x}, cargo size index {}",
            app_data,
            cargo_size_index
        );
        cargo_size_index
    }
}

crate::register_app_data_codec!(
    Class016App01,
    CLASS_USER_ID,
    APPLICATION_TYPE,
    "NATO JANUS reference implementation (station/destination addressing, ack request)"
);

fn decode_station_id(app_data: u64, fields: &mut AppFields) {
    let station_id = STATION_ID_SPAN.read(app_data);
    fields.add_field(STATION_ID_LABEL, station_id.to_string());
}

fn decode_destination_id(app_data: u64, fields: &mut AppFields) {
    let destination_id = DESTINATION_ID_SPAN.read(app_data);
    fields.add_field(DESTINATION_ID_LABEL, destination_id.to_string());
}

fn decode_ack_request(app_data: u64, fields: &mut AppFields) {
    // Single-bit flag, addressed 1-based from the MSB
    let ack_request = bmask(app_data, ACK_REQUEST_SPAN.msb_offset() + 1);
    fields.add_field(ACK_REQUEST_LABEL, ack_request.to_string());
}

/// Parameter Set Identifier extraction
///
/// Not part of `app_data_decode`: the span overlays the addressing bits and
/// whether receivers should report it is unconfirmed for this class.
pub fn decode_parameter_set_id(app_data: u64, fields: &mut AppFields) {
    let pset_id = PSET_ID_SPAN.read(app_data);
    fields.add_field(PSET_ID_LABEL, pset_id.to_string());
}

fn decode_cargo_size_index(app_data: u64) -> u32 {
    cargo_lookup_index(CARGO_SIZE_INDEX_SPAN.read(app_data) as u32)
}

/// Parse a field value that must fit in `span`
fn parse_field(label: &str, value: &FieldValue, span: BitSpan) -> CodecResult<u64> {
    let parse_error = || CodecError::FieldParse {
        label: label.to_string(),
        value: value.to_string(),
    };

    let text = value.as_text().ok_or_else(parse_error)?;
    let parsed = match (span.width, text.trim()) {
        (1, "true") => 1,
        (1, "false") => 0,
        _ => parse_decimal(text).ok_or_else(parse_error)?,
    };

    if parsed > span.max_value() {
        return Err(CodecError::FieldRange {
            label: label.to_string(),
            value: parsed,
            max: span.max_value(),
        });
    }
    Ok(parsed)
}

fn encode_field(app_data: u64, field: &AppField) -> CodecResult<u64> {
    let span = match field.name.as_str() {
        STATION_ID_LABEL => STATION_ID_SPAN,
        DESTINATION_ID_LABEL => DESTINATION_ID_SPAN,
        ACK_REQUEST_LABEL => ACK_REQUEST_SPAN,
        PSET_ID_LABEL => PSET_ID_SPAN,
        _ => {
            tracing::trace!("Skipping unrecognised field {}", field.name);
            return Ok(app_data);
        }
    };

    let value = parse_field(&field.name, &field.value, span)?;
    Ok(span.write(app_data, value))
}

impl AppDataCodec for Class016App01 {
    fn class_user_id(&self) -> u8 {
        CLASS_USER_ID
    }

    fn application_type(&self) -> u8 {
        APPLICATION_TYPE
    }

    fn app_data_decode(
        &self,
        app_data: u64,
        _app_data_size: u8,
        fields: &mut AppFields,
    ) -> CodecResult<u32> {
        Ok(self.decode_word(app_data, fields))
    }

    fn app_data_encode(
        &self,
        desired_cargo_size: usize,
        fields: &AppFields,
        _app_data_size: u8,
    ) -> CodecResult<EncodedAppData> {
        let size_class = lookup_size(desired_cargo_size).ok_or(CodecError::CargoSize {
            size: desired_cargo_size,
            max: MAX_TABLE_CARGO_SIZE,
        })?;

        let mut app_data = 0u64;
        for field in fields {
            app_data = encode_field(app_data, field)?;
        }

        // Written last so the index is never disturbed by the parameter set overlay
        app_data = CARGO_SIZE_INDEX_SPAN.write(app_data, size_class.index as u64);

        tracing::debug!(
            "Encoded app data {:#018x}, cargo {} -> {} bytes",
            app_data,
            desired_cargo_size,
            size_class.encoded_size
        );
        Ok(EncodedAppData {
            cargo_size: size_class.encoded_size,
            app_data,
        })
    }

    fn cargo_decode(&self, cargo: &[u8], fields: &mut AppFields) -> CodecResult<()> {
        cargo::cargo_decode(&self.config, cargo, fields)
    }

    fn cargo_encode(&self, fields: &AppFields) -> CodecResult<Vec<u8>> {
        cargo::cargo_encode(&self.config, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::crc::append_crc16;

    fn decode(app_data: u64) -> (u32, AppFields) {
        let mut fields = AppFields::new();
        let index = Class016App01::new()
            .app_data_decode(app_data, APP_DATA_SIZE, &mut fields)
            .unwrap();
        (index, fields)
    }

    fn encode(desired_cargo_size: usize, pairs: &[(&str, &str)]) -> CodecResult<EncodedAppData> {
        let fields: AppFields = pairs.iter().copied().collect();
        Class016App01::new().app_data_encode(desired_cargo_size, &fields, APP_DATA_SIZE)
    }

    fn text<'a>(fields: &'a AppFields, name: &str) -> &'a str {
        fields.value_of(name).and_then(|v| v.as_text()).unwrap()
    }

    #[test]
    fn test_station_id_scenario() {
        let encoded = encode(0, &[(STATION_ID_LABEL, "42")]).unwrap();
        assert_eq!(encoded.app_data, 42 << 18);
        assert_eq!(encoded.cargo_size, 0);

        let (index, fields) = decode(encoded.app_data);
        assert_eq!(index, 0);
        assert_eq!(fields.len(), 3);
        assert_eq!(text(&fields, STATION_ID_LABEL), "42");
        assert_eq!(text(&fields, DESTINATION_ID_LABEL), "0");
        assert_eq!(text(&fields, ACK_REQUEST_LABEL), "0");
    }

    #[test]
    fn test_decode_field_order() {
        let (_, fields) = decode(0);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![STATION_ID_LABEL, DESTINATION_ID_LABEL, ACK_REQUEST_LABEL]
        );
        assert!(fields.find(PSET_ID_LABEL).is_none());
    }

    #[test]
    fn test_round_trip_identifiers() {
        for v in 0..=255u64 {
            let value = v.to_string();
            for label in [STATION_ID_LABEL, DESTINATION_ID_LABEL] {
                let encoded = encode(0, &[(label, value.as_str())]).unwrap();
                let (_, fields) = decode(encoded.app_data);
                assert_eq!(text(&fields, label), value);
            }
        }
    }

    #[test]
    fn test_round_trip_ack_request() {
        for (input, expected) in [("0", "0"), ("1", "1"), ("true", "1"), ("false", "0")] {
            let encoded = encode(0, &[(ACK_REQUEST_LABEL, input)]).unwrap();
            let (_, fields) = decode(encoded.app_data);
            assert_eq!(text(&fields, ACK_REQUEST_LABEL), expected);
        }
    }

    #[test]
    fn test_decode_ack_request_reads_only_its_bit() {
        let neighbours = !(1u64 << 9);
        let (_, fields) = decode(neighbours);
        assert_eq!(text(&fields, ACK_REQUEST_LABEL), "0");

        let (_, fields) = decode(1 << 9);
        assert_eq!(text(&fields, ACK_REQUEST_LABEL), "1");
    }

    #[test]
    fn test_field_writes_are_disjoint() {
        let cases = [
            (STATION_ID_LABEL, "255"),
            (DESTINATION_ID_LABEL, "255"),
            (ACK_REQUEST_LABEL, "1"),
        ];
        for (label, value) in cases {
            let encoded = encode(0, &[(label, value)]).unwrap();
            let (index, fields) = decode(encoded.app_data);
            assert_eq!(index, 0, "{} bled into the cargo size index", label);
            for field in &fields {
                let expected = if field.name == label { value } else { "0" };
                assert_eq!(
                    field.value.as_text(),
                    Some(expected),
                    "{} bled into {}",
                    label,
                    field.name
                );
            }
        }

        // Cargo size index alone leaves the named fields at zero
        let encoded = encode(480, &[]).unwrap();
        let (index, fields) = decode(encoded.app_data);
        assert_eq!(index, 63);
        assert!(fields.iter().all(|f| f.value.as_text() == Some("0")));
    }

    #[test]
    fn test_encode_preserves_other_fields() {
        let encoded = encode(
            100,
            &[
                (STATION_ID_LABEL, "17"),
                (DESTINATION_ID_LABEL, "200"),
                (ACK_REQUEST_LABEL, "1"),
            ],
        )
        .unwrap();
        assert_eq!(encoded.cargo_size, 104);

        let (index, fields) = decode(encoded.app_data);
        assert_eq!(index, 16);
        assert_eq!(text(&fields, STATION_ID_LABEL), "17");
        assert_eq!(text(&fields, DESTINATION_ID_LABEL), "200");
        assert_eq!(text(&fields, ACK_REQUEST_LABEL), "1");
    }

    #[test]
    fn test_encode_cargo_size_limits() {
        assert_eq!(
            encode(481, &[]),
            Err(CodecError::CargoSize { size: 481, max: 480 })
        );

        let encoded = encode(480, &[]).unwrap();
        assert_eq!(encoded.cargo_size, 480);
        assert_eq!(encoded.app_data, 63);
    }

    #[test]
    fn test_encode_ignores_unknown_fields() {
        let encoded = encode(0, &[("TxRxFlag", "1"), (STATION_ID_LABEL, "3")]).unwrap();
        assert_eq!(encoded.app_data, 3 << 18);
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(
            encode(0, &[(STATION_ID_LABEL, "999")]),
            Err(CodecError::FieldRange {
                label: STATION_ID_LABEL.to_string(),
                value: 999,
                max: 255,
            })
        );
        assert!(matches!(
            encode(0, &[(ACK_REQUEST_LABEL, "2")]),
            Err(CodecError::FieldRange { max: 1, .. })
        ));
        assert!(matches!(
            encode(0, &[(PSET_ID_LABEL, "4096")]),
            Err(CodecError::FieldRange { max: 4095, .. })
        ));
    }

    #[test]
    fn test_encode_rejects_non_numeric() {
        assert!(matches!(
            encode(0, &[(DESTINATION_ID_LABEL, "abc")]),
            Err(CodecError::FieldParse { .. })
        ));

        let mut fields = AppFields::new();
        fields.add_blob(STATION_ID_LABEL, &[42]);
        assert!(matches!(
            Class016App01::new().app_data_encode(0, &fields, APP_DATA_SIZE),
            Err(CodecError::FieldParse { .. })
        ));
    }

    #[test]
    fn test_parameter_set_id() {
        let encoded = encode(0, &[(PSET_ID_LABEL, "4095")]).unwrap();
        // Index bits 6-7 are rewritten by the cargo size index
        assert_eq!(encoded.app_data, 0x3FF << 8);

        let mut fields = AppFields::new();
        decode_parameter_set_id(encoded.app_data, &mut fields);
        assert_eq!(text(&fields, PSET_ID_LABEL), "4092");

        let mut fields = AppFields::new();
        decode_parameter_set_id(0xABC << 6, &mut fields);
        assert_eq!(text(&fields, PSET_ID_LABEL), "2748");
    }

    #[test]
    fn test_later_fields_overwrite_overlay() {
        let encoded = encode(
            0,
            &[(PSET_ID_LABEL, "4095"), (DESTINATION_ID_LABEL, "0"), (ACK_REQUEST_LABEL, "0")],
        )
        .unwrap();
        let (_, fields) = decode(encoded.app_data);
        assert_eq!(text(&fields, DESTINATION_ID_LABEL), "0");
        assert_eq!(text(&fields, ACK_REQUEST_LABEL), "0");
    }

    #[test]
    fn test_cargo_round_trip_through_codec() {
        let codec = Class016App01::new();
        let payload = b"underwater";
        let cargo = append_crc16(payload, 0);

        let fields = codec.decode_cargo(&cargo).unwrap();
        assert_eq!(
            fields.value_of(PAYLOAD_LABEL),
            Some(&FieldValue::Blob(payload.to_vec()))
        );
        assert_eq!(text(&fields, PAYLOAD_SIZE_LABEL), "12");
    }

    #[test]
    fn test_decode_app_data_helper() {
        let decoded = Class016App01::new()
            .decode_app_data((7 << 18) | (9 << 10) | (1 << 9) | 5, APP_DATA_SIZE)
            .unwrap();
        assert_eq!(decoded.cargo_size_index, 5);
        assert_eq!(text(&decoded.fields, STATION_ID_LABEL), "7");
        assert_eq!(text(&decoded.fields, DESTINATION_ID_LABEL), "9");
        assert_eq!(text(&decoded.fields, ACK_REQUEST_LABEL), "1");
    }
}
