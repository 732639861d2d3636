// libdesfire/src/prelude.rs

pub use crate::card::{Application, Card, CardFile, FileContent};
pub use crate::device::{Device, DeviceBuilder};
pub use crate::protocol::{
    Command, EngineConfig, FileDetail, FileSettings, ManufacturingData, VersionInfo,
};
pub use crate::transit::{Registry, TransitData, TransitDecoder, TransitIdentity};
pub use crate::transport::{MockTransport, Transport, from_fn};
pub use crate::{
    AccessKey, AccessRights, ApplicationId, CommunicationMode, Error, FileId, FileType,
    ProtocolViolation, Result, StatusError, ValueBalance,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
