// Constants for JANUS Class User Id 016, Application Type 01
// Reference: januswiki "Class User Id: 016 NATO JANUS reference Implementation"

use crate::bitwise::BitSpan;

/// Class User Identifier served by this plugin
pub const CLASS_USER_ID: u8 = 16;

/// Application Type served by this plugin
pub const APPLICATION_TYPE: u8 = 1;

/// Declared width of the application data block in a baseline packet
pub const APP_DATA_SIZE: u8 = 34;

pub const STATION_ID_LABEL: &str = "StationIdentifier";
pub const DESTINATION_ID_LABEL: &str = "DestinationIdentifier";
pub const ACK_REQUEST_LABEL: &str = "AckRequest";
pub const PSET_ID_LABEL: &str = "ParameterSetIdentifier";
pub const PAYLOAD_SIZE_LABEL: &str = "PayloadSize";
pub const PAYLOAD_LABEL: &str = "Payload";

/// Station Identifier, 8 bits
pub const STATION_ID_SPAN: BitSpan = BitSpan::new(18, 8);

/// Destination Identifier, 8 bits
pub const DESTINATION_ID_SPAN: BitSpan = BitSpan::new(10, 8);

/// Ack Request flag, 1 bit
pub const ACK_REQUEST_SPAN: BitSpan = BitSpan::new(9, 1);

/// Parameter Set Identifier, 12 bits
///
/// Overlays the destination, ack and the top of the cargo size index spans.
pub const PSET_ID_SPAN: BitSpan = BitSpan::new(6, 12);

/// Cargo size class index, low 8 bits of the word
pub const CARGO_SIZE_INDEX_SPAN: BitSpan = BitSpan::new(0, 8);

/// Largest desired cargo size the size class table can express
pub const MAX_TABLE_CARGO_SIZE: usize = 480;

/// Size of the CRC-16 trailer at the end of every cargo
pub const CRC_BYTES: usize = 2;

/// Default cap on the cargo of a single packet
pub const DEFAULT_MAX_PKT_CARGO_SIZE: usize = MAX_TABLE_CARGO_SIZE;

/// Seed used for the cargo CRC-16
pub const DEFAULT_CRC_SEED: u16 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_spans_are_disjoint() {
        let spans = [
            STATION_ID_SPAN,
            DESTINATION_ID_SPAN,
            ACK_REQUEST_SPAN,
            CARGO_SIZE_INDEX_SPAN,
        ];
        for (i, a) in spans.iter().enumerate() {
            for b in spans.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_msb_offsets() {
        assert_eq!(STATION_ID_SPAN.msb_offset(), 38);
        assert_eq!(DESTINATION_ID_SPAN.msb_offset(), 46);
        assert_eq!(ACK_REQUEST_SPAN.msb_offset(), 54);
        assert_eq!(PSET_ID_SPAN.msb_offset(), 46);
        assert_eq!(CARGO_SIZE_INDEX_SPAN.msb_offset(), 56);
    }
}
