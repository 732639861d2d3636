// libdesfire/src/protocol/responses/settings.rs

use crate::constants::size;
use crate::protocol::parser;
use crate::types::{AccessRights, CommunicationMode, FileType};
use crate::{ProtocolViolation, Result};

/// Decoded GetFileSettings response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSettings {
    pub file_type: FileType,
    pub communication: CommunicationMode,
    pub access: AccessRights,
    pub detail: FileDetail,
}

/// Type-specific part of the file settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileDetail {
    /// Standard and backup data files.
    Data { size: u32 },
    Value {
        lower_limit: i32,
        upper_limit: i32,
        limited_credit_value: i32,
        limited_credit_enabled: bool,
    },
    /// Linear and cyclic record files.
    Record {
        record_size: u32,
        max_records: u32,
        current_records: u32,
    },
}

impl FileSettings {
    /// Data file size, or `record_size * current_records` for record files.
    pub fn content_len(&self) -> Option<u32> {
        match self.detail {
            FileDetail::Data { size } => Some(size),
            FileDetail::Record {
                record_size,
                current_records,
                ..
            } => record_size.checked_mul(current_records),
            FileDetail::Value { .. } => None,
        }
    }
}

/// Decode a GetFileSettings payload.
/// Header: type(1) + comm_mode(1) + access_rights(2, LE), then:
/// - data files: size(3)
/// - value files: lower(4) + upper(4) + limited_credit(4) + limited_credit_enabled(1)
/// - record files: record_size(3) + max_records(3) + current_records(3)
///
/// Bytes after the type-specific block are ignored.
pub fn decode_file_settings(data: &[u8]) -> Result<FileSettings> {
    parser::ensure_len(data, size::FILE_SETTINGS_HEADER)?;

    let type_byte = parser::byte_at(data, 0)?;
    let file_type =
        FileType::from_byte(type_byte).ok_or(ProtocolViolation::UnknownFileType(type_byte))?;
    let communication = CommunicationMode::from_byte(parser::byte_at(data, 1)?);
    let access = AccessRights::from_le_bytes(parser::array_at::<2>(data, 2)?);

    const BODY: usize = size::FILE_SETTINGS_HEADER;
    let detail = match file_type {
        FileType::StandardData | FileType::BackupData => FileDetail::Data {
            size: parser::le_u24_at(data, BODY)?,
        },
        FileType::Value => {
            parser::ensure_len(data, BODY + 13)?;
            FileDetail::Value {
                lower_limit: parser::le_i32_at(data, BODY)?,
                upper_limit: parser::le_i32_at(data, BODY + 4)?,
                limited_credit_value: parser::le_i32_at(data, BODY + 8)?,
                limited_credit_enabled: parser::byte_at(data, BODY + 12)? & 0x01 != 0,
            }
        }
        FileType::LinearRecord | FileType::CyclicRecord => {
            parser::ensure_len(data, BODY + 9)?;
            FileDetail::Record {
                record_size: parser::le_u24_at(data, BODY)?,
                max_records: parser::le_u24_at(data, BODY + 3)?,
                current_records: parser::le_u24_at(data, BODY + 6)?,
            }
        }
    };

    Ok(FileSettings {
        file_type,
        communication,
        access,
        detail,
    })
}
