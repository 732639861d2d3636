// libdesfire/src/protocol/responses/directory.rs

use crate::constants::size;
use crate::types::{ApplicationId, FileId};
use crate::{ProtocolViolation, Result};

/// Decode a GetApplicationIDs payload: consecutive 3-byte AIDs, MSB first.
pub fn decode_application_ids(data: &[u8]) -> Result<Vec<ApplicationId>> {
    if data.len() % size::APPLICATION_ID != 0 {
        return Err(ProtocolViolation::MisalignedLength {
            unit: size::APPLICATION_ID,
            actual: data.len(),
        }
        .into());
    }

    Ok(data
        .chunks_exact(size::APPLICATION_ID)
        .map(|c| ApplicationId::from_bytes([c[0], c[1], c[2]]))
        .collect())
}

/// Decode a GetFileIDs payload: one file number per byte.
pub fn decode_file_ids(data: &[u8]) -> Vec<FileId> {
    data.iter().copied().map(FileId::new).collect()
}
