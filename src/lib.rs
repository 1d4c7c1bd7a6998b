// JANUS plugin for Class User Id 016 / Application Type 01
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod codec;
pub mod core;

#[doc(hidden)]
pub use inventory;

// Re-export commonly used types
pub use codec::{
    decode_app_data, decode_cargo, encode_app_data, encode_cargo, extract_crc16, get_codec,
    list_codecs, AppDataCodec, Class016App01, CodecError, CodecResult, DecodedAppData,
    EncodedAppData,
};
pub use self::core::{AppField, AppFields, CodecConfig, FieldValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
