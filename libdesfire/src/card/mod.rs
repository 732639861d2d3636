// libdesfire/src/card/mod.rs

//! Read-only snapshot of a whole card: identification data plus every
//! application and file that could be enumerated.

use crate::protocol::{FileSettings, ManufacturingData};
use crate::types::{ApplicationId, FileId, FileType, ValueBalance};

pub mod reader;

pub use reader::read_card;

/// Content of one file, as far as it could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileContent {
    /// Standard/backup file bytes.
    Data(Vec<u8>),
    /// Record file bytes, all records concatenated.
    Records(Vec<u8>),
    Value(ValueBalance),
    /// The card requires authentication for this file.
    AccessDenied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardFile {
    pub id: FileId,
    /// `None` when the settings themselves are protected.
    pub settings: Option<FileSettings>,
    pub content: FileContent,
}

impl CardFile {
    pub fn file_type(&self) -> Option<FileType> {
        self.settings.map(|s| s.file_type)
    }

    /// Balance of a readable value file.
    pub fn value(&self) -> Option<ValueBalance> {
        match self.content {
            FileContent::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Raw bytes of a readable data or record file.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.content {
            FileContent::Data(d) | FileContent::Records(d) => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Application {
    pub id: ApplicationId,
    pub files: Vec<CardFile>,
}

impl Application {
    pub fn file(&self, id: FileId) -> Option<&CardFile> {
        self.files.iter().find(|f| f.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub manufacturing: ManufacturingData,
    pub applications: Vec<Application>,
}

impl Card {
    /// Read the whole card through `device`. See [`read_card`].
    pub fn read(device: &mut crate::device::Device) -> crate::Result<Self> {
        read_card(device)
    }

    pub fn application(&self, id: ApplicationId) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn uid(&self) -> [u8; 7] {
        self.manufacturing.uid
    }
}
