// libdesfire/src/card/reader.rs

use log::{debug, warn};

use crate::device::Device;
use crate::types::{ApplicationId, FileId, FileType};
use crate::{Error, Result};

use super::{Application, Card, CardFile, FileContent};

/// Walk the card: manufacturing data, then every application and file.
///
/// Files the card refuses without authentication are kept as
/// [`FileContent::AccessDenied`]; any other failure aborts the walk.
pub fn read_card(device: &mut Device) -> Result<Card> {
    let manufacturing = device.get_manufacturing_data()?;
    debug!("card uid {}", manufacturing.uid_hex());

    let ids = device.list_applications()?;
    let mut applications = Vec::with_capacity(ids.len());
    for aid in ids {
        applications.push(read_application(device, aid)?);
    }

    Ok(Card {
        manufacturing,
        applications,
    })
}

/// Select `aid` and read every file in it.
pub fn read_application(device: &mut Device, aid: ApplicationId) -> Result<Application> {
    device.select_application(aid)?;

    let ids = match device.list_files() {
        Ok(ids) => ids,
        Err(e) if e.is_access_denied() => {
            warn!("application {}: file list is protected ({})", aid, e);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let mut files = Vec::with_capacity(ids.len());
    for id in ids {
        files.push(read_file(device, id)?);
    }
    debug!("application {}: {} file(s)", aid, files.len());

    Ok(Application { id: aid, files })
}

/// Read the settings of `id` and its content according to the file type.
pub fn read_file(device: &mut Device, id: FileId) -> Result<CardFile> {
    let settings = denied_as_none(device.get_file_settings(id))?;

    let content = match settings.map(|s| s.file_type) {
        None => Ok(FileContent::AccessDenied),
        Some(FileType::Value) => device.read_value(id).map(FileContent::Value),
        Some(FileType::LinearRecord | FileType::CyclicRecord) => {
            device.read_record_file(id).map(FileContent::Records)
        }
        Some(FileType::StandardData | FileType::BackupData) => {
            device.read_data_file(id).map(FileContent::Data)
        }
    };
    let content = denied_as_none(content)?.unwrap_or(FileContent::AccessDenied);

    Ok(CardFile {
        id,
        settings,
        content,
    })
}

fn denied_as_none<T>(res: Result<T>) -> Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_access_denied() => Ok(None),
        Err(e) => Err(e),
    }
}
