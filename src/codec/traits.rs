// Codec traits and error type shared by every application data variant

use crate::core::AppFields;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Cargo size {size} exceeds maximum of {max} bytes")]
    CargoSize { size: usize, max: usize },

    #[error("Cargo of {size} bytes is shorter than the {min}-byte CRC trailer")]
    CargoTooShort { size: usize, min: usize },

    #[error("Cargo corrupted: computed CRC {computed:#06x}, received {received:#06x}")]
    CargoCorrupted { computed: u16, received: u16 },

    #[error("Neither PayloadSize nor Payload field present")]
    FieldsMissing,

    #[error("Field {label} has an invalid value: {value:?}")]
    FieldParse { label: String, value: String },

    #[error("Field {label} value {value} exceeds maximum of {max}")]
    FieldRange { label: String, value: u64, max: u64 },

    #[error("No codec registered for class {class_user_id}, application type {application_type}")]
    UnknownVariant {
        class_user_id: u8,
        application_type: u8,
    },
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Result of decoding an application data word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAppData {
    pub cargo_size_index: u32,
    pub fields: AppFields,
}

/// Result of encoding an application data word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedAppData {
    /// Padded cargo length announced by the size class index
    pub cargo_size: usize,
    pub app_data: u64,
}

/// Uniform interface of an application data / cargo codec variant
pub trait AppDataCodec: Send + Sync {
    /// Class User Identifier this codec serves
    fn class_user_id(&self) -> u8;

    /// Application Type this codec serves
    fn application_type(&self) -> u8;

    /// Printable name for this variant
    fn name(&self) -> String {
        format!(
            "class {:03} / application type {:02}",
            self.class_user_id(),
            self.application_type()
        )
    }

    /// Append the fields carried by `app_data` and return the cargo size index
    fn app_data_decode(
        &self,
        app_data: u64,
        app_data_size: u8,
        fields: &mut AppFields,
    ) -> CodecResult<u32>;

    /// Build the application data word for `fields` and a desired cargo size
    fn app_data_encode(
        &self,
        desired_cargo_size: usize,
        fields: &AppFields,
        app_data_size: u8,
    ) -> CodecResult<EncodedAppData>;

    /// Append the fields carried by `cargo`, verifying its CRC-16 trailer
    fn cargo_decode(&self, cargo: &[u8], fields: &mut AppFields) -> CodecResult<()>;

    /// Build the cargo bytes from the payload fields
    fn cargo_encode(&self, fields: &AppFields) -> CodecResult<Vec<u8>>;

    /// Decode into a fresh collection
    fn decode_app_data(&self, app_data: u64, app_data_size: u8) -> CodecResult<DecodedAppData> {
        let mut fields = AppFields::new();
        let cargo_size_index = self.app_data_decode(app_data, app_data_size, &mut fields)?;
        Ok(DecodedAppData {
            cargo_size_index,
            fields,
        })
    }

    /// Decode cargo into a fresh collection
    fn decode_cargo(&self, cargo: &[u8]) -> CodecResult<AppFields> {
        let mut fields = AppFields::new();
        self.cargo_decode(cargo, &mut fields)?;
        Ok(fields)
    }
}
