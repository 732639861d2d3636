// libdesfire/src/types.rs

use derive_more::{Display, From};

use crate::Error;

/// Application identifier (AID), 24 bits on the wire, most significant byte first.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{:06X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct ApplicationId(u32);

impl ApplicationId {
    /// Card-level application (the PICC master application).
    pub const PICC: Self = Self(0);

    /// Largest representable AID.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Returns `None` if `id` does not fit in 24 bits.
    pub const fn new(id: u32) -> Option<Self> {
        if id > Self::MAX {
            None
        } else {
            Some(Self(id))
        }
    }

    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        let [_, hi, mid, lo] = self.0.to_be_bytes();
        [hi, mid, lo]
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.to_bytes())
    }
}

impl TryFrom<u32> for ApplicationId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(Error::InvalidApplicationId(id))
    }
}

impl TryFrom<&[u8]> for ApplicationId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 3] = bytes.try_into().map_err(|_| {
            crate::ProtocolViolation::UnexpectedLength {
                expected: 3,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::from_bytes(arr))
    }
}

impl From<ApplicationId> for u32 {
    fn from(aid: ApplicationId) -> Self {
        aid.0
    }
}

/// File number inside the selected application.
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{:02X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FileId(u8);

impl FileId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<FileId> for u8 {
    fn from(id: FileId) -> Self {
        id.0
    }
}

/// Signed balance held by a value file, in card-defined minor units.
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValueBalance(i32);

impl ValueBalance {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Little-endian wire form, as sent by GetValue.
    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(i32::from_le_bytes(bytes))
    }
}

impl From<ValueBalance> for i32 {
    fn from(v: ValueBalance) -> Self {
        v.0
    }
}

/// File types, as reported in the first file-settings byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    StandardData = 0x00,
    BackupData = 0x01,
    Value = 0x02,
    LinearRecord = 0x03,
    CyclicRecord = 0x04,
}

impl FileType {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Self::StandardData),
            0x01 => Some(Self::BackupData),
            0x02 => Some(Self::Value),
            0x03 => Some(Self::LinearRecord),
            0x04 => Some(Self::CyclicRecord),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::LinearRecord | Self::CyclicRecord)
    }
}

/// Communication settings of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommunicationMode {
    Plain,
    Maced,
    Enciphered,
    Unknown(u8),
}

impl CommunicationMode {
    pub fn from_byte(b: u8) -> Self {
        match b {
            0x00 | 0x02 => Self::Plain,
            0x01 => Self::Maced,
            0x03 => Self::Enciphered,
            other => Self::Unknown(other),
        }
    }
}

/// Key number reference inside an access-rights nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessKey {
    Key(u8),
    Free,
    Denied,
}

impl AccessKey {
    fn from_nibble(n: u8) -> Self {
        match n & 0x0f {
            0x0e => Self::Free,
            0x0f => Self::Denied,
            k => Self::Key(k),
        }
    }
}

/// Two access-rights bytes, kept as the little-endian u16 the card sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessRights(u16);

impl AccessRights {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn read(&self) -> AccessKey {
        AccessKey::from_nibble((self.0 >> 12) as u8)
    }

    pub fn write(&self) -> AccessKey {
        AccessKey::from_nibble((self.0 >> 8) as u8)
    }

    pub fn read_write(&self) -> AccessKey {
        AccessKey::from_nibble((self.0 >> 4) as u8)
    }

    pub fn change(&self) -> AccessKey {
        AccessKey::from_nibble(self.0 as u8)
    }

    /// Reading needs no authentication through either read right.
    pub fn is_free_read(&self) -> bool {
        self.read() == AccessKey::Free || self.read_write() == AccessKey::Free
    }
}
