// Application data and cargo codecs
pub mod cargo;
pub mod crc;
pub mod registry;
pub mod size_table;
pub mod traits;

// Variants
pub mod class_016_01;

pub use class_016_01::Class016App01;
pub use self::crc::{append_crc16, crc16, extract_crc16};
pub use registry::{find_codec, get_codec, get_codec_with_config, list_codecs, CodecInfo};
pub use size_table::{
    cargo_lookup_index, encoded_cargo_size, encoded_size_for_index, lookup_size, SizeClass,
};
pub use traits::{AppDataCodec, CodecError, CodecResult, DecodedAppData, EncodedAppData};

use crate::core::AppFields;

/// Decode an application data word with the class 016/01 layout
pub fn decode_app_data(app_data: u64, _app_data_size: u8) -> DecodedAppData {
    let mut fields = AppFields::new();
    let cargo_size_index = Class016App01::new().decode_word(app_data, &mut fields);
    DecodedAppData {
        cargo_size_index,
        fields,
    }
}

/// Encode `fields` into a class 016/01 application data word
pub fn encode_app_data(
    desired_cargo_size: usize,
    fields: &AppFields,
    app_data_size: u8,
) -> CodecResult<EncodedAppData> {
    Class016App01::new().app_data_encode(desired_cargo_size, fields, app_data_size)
}

/// Decode cargo bytes into a fresh field collection
pub fn decode_cargo(cargo: &[u8]) -> CodecResult<AppFields> {
    Class016App01::new().decode_cargo(cargo)
}

/// Encode the payload fields into cargo bytes
pub fn encode_cargo(fields: &AppFields) -> CodecResult<Vec<u8>> {
    Class016App01::new().cargo_encode(fields)
}
