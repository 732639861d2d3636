// libdesfire/src/protocol/commands/mod.rs

pub mod application;
pub mod file;

pub use application::encode_select_application;
pub use file::{encode_file_number, encode_read_all};

use crate::constants::command;
use crate::types::{ApplicationId, FileId};

/// Read-only native commands. New commands get a variant here and their
/// parameter encoder in `protocol::commands::<topic>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetManufacturingData,
    GetApplicationDirectory,
    SelectApplication { aid: ApplicationId },
    GetFileIds,
    GetFileSettings { file: FileId },
    ReadData { file: FileId },
    GetValue { file: FileId },
    ReadRecords { file: FileId },
    /// Fetch the next frame of a pending multi-frame response.
    AdditionalFrame,
}

impl Command {
    /// Native command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetManufacturingData => command::GET_MANUFACTURING_DATA,
            Self::GetApplicationDirectory => command::GET_APPLICATION_DIRECTORY,
            Self::SelectApplication { .. } => command::SELECT_APPLICATION,
            Self::GetFileIds => command::GET_FILES,
            Self::GetFileSettings { .. } => command::GET_FILE_SETTINGS,
            Self::ReadData { .. } => command::READ_DATA,
            Self::GetValue { .. } => command::GET_VALUE,
            Self::ReadRecords { .. } => command::READ_RECORD,
            Self::AdditionalFrame => command::ADDITIONAL_FRAME,
        }
    }

    /// Parameter block, `None` for commands that carry no parameters.
    pub fn parameters(&self) -> Option<Vec<u8>> {
        match self {
            Self::GetManufacturingData
            | Self::GetApplicationDirectory
            | Self::GetFileIds
            | Self::AdditionalFrame => None,
            Self::SelectApplication { aid } => Some(encode_select_application(*aid).to_vec()),
            Self::GetFileSettings { file } | Self::GetValue { file } => {
                Some(encode_file_number(*file).to_vec())
            }
            Self::ReadData { file } | Self::ReadRecords { file } => {
                Some(encode_read_all(*file).to_vec())
            }
        }
    }

    /// Encode the full wire frame for this command.
    pub fn encode(&self) -> Vec<u8> {
        super::frame::build_frame(self.command_code(), self.parameters().as_deref())
    }
}
