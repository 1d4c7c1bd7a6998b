// Codec registry for application data variants
// Variants register themselves at link time and are looked up by
// (Class User Id, Application Type).

use super::traits::{AppDataCodec, CodecError, CodecResult};
use crate::core::CodecConfig;
use std::fmt;

/// Constructor stored for each registered variant
pub type CodecConstructor = fn(CodecConfig) -> Box<dyn AppDataCodec>;

/// Information about a registered codec variant
pub struct CodecInfo {
    pub class_user_id: u8,
    pub application_type: u8,
    pub description: &'static str,
    constructor: CodecConstructor,
}

impl CodecInfo {
    pub const fn new(
        class_user_id: u8,
        application_type: u8,
        description: &'static str,
        constructor: CodecConstructor,
    ) -> Self {
        Self {
            class_user_id,
            application_type,
            description,
            constructor,
        }
    }

    /// Build an instance of the codec
    pub fn create(&self, config: CodecConfig) -> Box<dyn AppDataCodec> {
        (self.constructor)(config)
    }

    pub fn full_name(&self) -> String {
        format!(
            "{:03}/{:02} {}",
            self.class_user_id, self.application_type, self.description
        )
    }
}

impl fmt::Debug for CodecInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecInfo")
            .field("class_user_id", &self.class_user_id)
            .field("application_type", &self.application_type)
            .field("description", &self.description)
            .finish()
    }
}

inventory::collect!(CodecInfo);

/// Get information about a specific variant
pub fn find_codec(class_user_id: u8, application_type: u8) -> Option<&'static CodecInfo> {
    inventory::iter::<CodecInfo>
        .into_iter()
        .find(|info| {
            info.class_user_id == class_user_id && info.application_type == application_type
        })
}

/// Build the codec for a variant with the default configuration
pub fn get_codec(class_user_id: u8, application_type: u8) -> CodecResult<Box<dyn AppDataCodec>> {
    get_codec_with_config(class_user_id, application_type, CodecConfig::default())
}

/// Build the codec for a variant with `config`
pub fn get_codec_with_config(
    class_user_id: u8,
    application_type: u8,
    config: CodecConfig,
) -> CodecResult<Box<dyn AppDataCodec>> {
    let info = find_codec(class_user_id, application_type).ok_or(CodecError::UnknownVariant {
        class_user_id,
        application_type,
    })?;
    tracing::debug!("Using codec {}", info.full_name());
    Ok(info.create(config))
}

/// List all registered variants, ordered by identifier
pub fn list_codecs() -> Vec<&'static CodecInfo> {
    let mut codecs: Vec<&'static CodecInfo> = inventory::iter::<CodecInfo>.into_iter().collect();
    codecs.sort_by_key(|info| (info.class_user_id, info.application_type));
    codecs
}

/// Register a codec variant
///
/// The codec type must provide `with_config(CodecConfig) -> Self`.
#[macro_export]
macro_rules! register_app_data_codec {
    ($codec:ty, $class_user_id:expr, $application_type:expr, $description:expr) => {
        const _: () = {
            fn construct(
                config: $crate::core::CodecConfig,
            ) -> ::std::boxed::Box<dyn $crate::codec::AppDataCodec> {
                ::std::boxed::Box::new(<$codec>::with_config(config))
            }

            $crate::inventory::submit! {
                $crate::codec::registry::CodecInfo::new(
                    $class_user_id,
                    $application_type,
                    $description,
                    construct
                )
            }
        };
    };
}
