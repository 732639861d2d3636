// libdesfire/src/protocol/responses/mod.rs

//! Pure payload decoders. They take the reassembled payload returned by the
//! engine (trailers already stripped) and need no transport, so they can be
//! run directly against captured bytes.

pub mod directory;
pub mod manufacturing;
pub mod settings;
pub mod value;

pub use directory::{decode_application_ids, decode_file_ids};
pub use manufacturing::{ManufacturingData, VersionInfo, decode_manufacturing_data};
pub use settings::{FileDetail, FileSettings, decode_file_settings};
pub use value::decode_value;
