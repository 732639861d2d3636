// libdesfire/src/protocol/responses/manufacturing.rs

use crate::constants::size;
use crate::protocol::parser;
use crate::Result;

/// Vendor/type/version block, reported once for hardware and once for software.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    pub vendor_id: u8,
    pub kind: u8,
    pub subtype: u8,
    pub major_version: u8,
    pub minor_version: u8,
    pub storage_size: u8,
    pub protocol: u8,
}

impl VersionInfo {
    fn from_bytes(b: [u8; 7]) -> Self {
        Self {
            vendor_id: b[0],
            kind: b[1],
            subtype: b[2],
            major_version: b[3],
            minor_version: b[4],
            storage_size: b[5],
            protocol: b[6],
        }
    }

    /// Storage size in bytes and whether it is exact.
    ///
    /// The upper seven bits hold `n` for `2^n` bytes; a set low bit means the
    /// real size lies between `2^n` and `2^(n+1)`.
    pub fn storage_size_bytes(&self) -> (u64, bool) {
        let exponent = u32::from(self.storage_size >> 1);
        let exact = self.storage_size & 0x01 == 0;
        (1u64.checked_shl(exponent).unwrap_or(u64::MAX), exact)
    }
}

/// Manufacturing and identification record returned by GetVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManufacturingData {
    pub hardware: VersionInfo,
    pub software: VersionInfo,
    pub uid: [u8; 7],
    pub batch_number: [u8; 5],
    /// BCD-coded production week, as sent.
    pub production_week: u8,
    /// BCD-coded production year, as sent.
    pub production_year: u8,
}

impl ManufacturingData {
    pub fn uid_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.uid)
    }
}

/// Decode the 28-byte manufacturing record.
/// Layout: hardware(7) + software(7) + uid(7) + batch(5) + week(1) + year(1)
pub fn decode_manufacturing_data(data: &[u8]) -> Result<ManufacturingData> {
    parser::expect_len(data, size::MANUFACTURING_DATA)?;

    Ok(ManufacturingData {
        hardware: VersionInfo::from_bytes(parser::array_at(data, 0)?),
        software: VersionInfo::from_bytes(parser::array_at(data, 7)?),
        uid: parser::array_at(data, 14)?,
        batch_number: parser::array_at(data, 21)?,
        production_week: parser::byte_at(data, 26)?,
        production_year: parser::byte_at(data, 27)?,
    })
}
