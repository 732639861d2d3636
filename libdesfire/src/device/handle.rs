// libdesfire/src/device/handle.rs

use log::debug;

use crate::protocol::{
    Command, EngineConfig, FileSettings, ManufacturingData, decode_application_ids,
    decode_file_ids, decode_file_settings, decode_manufacturing_data, decode_value, engine,
};
use crate::transport::Transport;
use crate::types::{ApplicationId, FileId, ValueBalance};
use crate::{ProtocolViolation, Result};

/// Handle to a card reached through one transport.
///
/// Every method is one logical operation: it either returns a fully decoded
/// result or one typed error. Methods take `&mut self`, so a second command
/// can never start while a multi-frame response is still being fetched.
pub struct Device {
    transport: Box<dyn Transport>,
    config: EngineConfig,
}

impl Device {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, EngineConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: EngineConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Give the transport back, e.g. to close the platform session.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    /// Execute a command and return the reassembled payload.
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        engine::execute_command(&mut *self.transport, cmd, &self.config)
    }

    /// Select an application; `ApplicationId::PICC` returns to card level.
    pub fn select_application(&mut self, aid: ApplicationId) -> Result<()> {
        debug!("selecting application {}", aid);
        let payload = self.execute(&Command::SelectApplication { aid })?;
        if !payload.is_empty() {
            return Err(ProtocolViolation::UnexpectedLength {
                expected: 0,
                actual: payload.len(),
            }
            .into());
        }
        Ok(())
    }

    pub fn list_applications(&mut self) -> Result<Vec<ApplicationId>> {
        let payload = self.execute(&Command::GetApplicationDirectory)?;
        decode_application_ids(&payload)
    }

    /// File numbers of the selected application.
    pub fn list_files(&mut self) -> Result<Vec<FileId>> {
        let payload = self.execute(&Command::GetFileIds)?;
        Ok(decode_file_ids(&payload))
    }

    pub fn get_file_settings(&mut self, file: FileId) -> Result<FileSettings> {
        let payload = self.execute(&Command::GetFileSettings { file })?;
        decode_file_settings(&payload)
    }

    /// Whole content of a standard or backup data file.
    pub fn read_data_file(&mut self, file: FileId) -> Result<Vec<u8>> {
        self.execute(&Command::ReadData { file })
    }

    /// Every record of a linear or cyclic record file, concatenated.
    pub fn read_record_file(&mut self, file: FileId) -> Result<Vec<u8>> {
        self.execute(&Command::ReadRecords { file })
    }

    pub fn read_value(&mut self, file: FileId) -> Result<ValueBalance> {
        let payload = self.execute(&Command::GetValue { file })?;
        decode_value(&payload)
    }

    pub fn get_manufacturing_data(&mut self) -> Result<ManufacturingData> {
        let payload = self.execute(&Command::GetManufacturingData)?;
        decode_manufacturing_data(&payload)
    }
}
