// libdesfire/src/error.rs

use thiserror::Error;

use crate::constants::status;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    #[error("card status error: {0}")]
    Status(#[from] StatusError),

    #[error("unknown card status: {0:#04x}")]
    UnknownStatus(u8),

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("operation timed out")]
    Timeout,

    #[error("application id {0:#x} does not fit in 24 bits")]
    InvalidApplicationId(u32),

    #[error("unsupported card: {0}")]
    UnsupportedCard(String),
}

impl Error {
    /// Wrap an arbitrary transport failure. The engine never inspects it.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Transport(err.into())
    }

    /// The card refused access to the object (key not authenticated).
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Error::Status(StatusError::PermissionDenied | StatusError::AuthenticationError)
        )
    }
}

/// Malformed framing or payload shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolViolation {
    #[error("invalid trailer marker: expected 0x91, got {actual:#04x}")]
    InvalidTrailerMarker { actual: u8 },

    #[error("response too short: {actual} byte(s), trailer needs 2")]
    ResponseTooShort { actual: usize },

    #[error("unexpected payload length: expected {expected}, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error("payload length {actual} is not a multiple of {unit}")]
    MisalignedLength { unit: usize, actual: usize },

    #[error("unknown file type {0:#04x}")]
    UnknownFileType(u8),

    #[error("more than {limit} frames for a single command")]
    TooManyContinuationFrames { limit: usize },
}

/// Documented failure statuses returned by the card.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusError {
    #[error("no changes done, transaction not necessary")]
    NoChanges,
    #[error("insufficient non-volatile memory to complete command")]
    OutOfEeprom,
    #[error("command code not supported")]
    IllegalCommandCode,
    #[error("padding bytes not valid")]
    IntegrityError,
    #[error("invalid key number")]
    NoSuchKey,
    #[error("length of command string invalid")]
    LengthError,
    #[error("permission denied")]
    PermissionDenied,
    #[error("values of parameters invalid")]
    ParameterError,
    #[error("requested application not present on card")]
    ApplicationNotFound,
    #[error("unrecoverable error within application")]
    ApplicationIntegrityError,
    #[error("authentication error")]
    AuthenticationError,
    #[error("attempt to read/write beyond the file's or record's limits")]
    BoundaryError,
    #[error("unrecoverable error within card")]
    PiccIntegrityError,
    #[error("command aborted")]
    CommandAborted,
    #[error("card was disabled by an unrecoverable error")]
    PiccDisabled,
    #[error("number of applications limited to 28")]
    CountError,
    #[error("file or application already exists")]
    DuplicateError,
    #[error("eeprom error due to loss of power")]
    EepromError,
    #[error("file not found")]
    FileNotFound,
    #[error("unrecoverable error within file")]
    FileIntegrityError,
}

impl StatusError {
    /// Every documented failure status, in status-byte order.
    pub const ALL: [StatusError; 20] = [
        StatusError::NoChanges,
        StatusError::OutOfEeprom,
        StatusError::IllegalCommandCode,
        StatusError::IntegrityError,
        StatusError::NoSuchKey,
        StatusError::LengthError,
        StatusError::PermissionDenied,
        StatusError::ParameterError,
        StatusError::ApplicationNotFound,
        StatusError::ApplicationIntegrityError,
        StatusError::AuthenticationError,
        StatusError::BoundaryError,
        StatusError::PiccIntegrityError,
        StatusError::CommandAborted,
        StatusError::PiccDisabled,
        StatusError::CountError,
        StatusError::DuplicateError,
        StatusError::EepromError,
        StatusError::FileNotFound,
        StatusError::FileIntegrityError,
    ];

    /// Status byte the card sends for this failure.
    pub fn code(self) -> u8 {
        match self {
            StatusError::NoChanges => status::NO_CHANGES,
            StatusError::OutOfEeprom => status::OUT_OF_EEPROM,
            StatusError::IllegalCommandCode => status::ILLEGAL_COMMAND_CODE,
            StatusError::IntegrityError => status::INTEGRITY_ERROR,
            StatusError::NoSuchKey => status::NO_SUCH_KEY,
            StatusError::LengthError => status::LENGTH_ERROR,
            StatusError::PermissionDenied => status::PERMISSION_DENIED,
            StatusError::ParameterError => status::PARAMETER_ERROR,
            StatusError::ApplicationNotFound => status::APPLICATION_NOT_FOUND,
            StatusError::ApplicationIntegrityError => status::APPLICATION_INTEGRITY_ERROR,
            StatusError::AuthenticationError => status::AUTHENTICATION_ERROR,
            StatusError::BoundaryError => status::BOUNDARY_ERROR,
            StatusError::PiccIntegrityError => status::PICC_INTEGRITY_ERROR,
            StatusError::CommandAborted => status::COMMAND_ABORTED,
            StatusError::PiccDisabled => status::PICC_DISABLED,
            StatusError::CountError => status::COUNT_ERROR,
            StatusError::DuplicateError => status::DUPLICATE_ERROR,
            StatusError::EepromError => status::EEPROM_ERROR,
            StatusError::FileNotFound => status::FILE_NOT_FOUND,
            StatusError::FileIntegrityError => status::FILE_INTEGRITY_ERROR,
        }
    }

    /// Map a status byte to its documented failure, if it is one.
    pub fn from_code(code: u8) -> Option<Self> {
        let err = match code {
            status::NO_CHANGES => StatusError::NoChanges,
            status::OUT_OF_EEPROM => StatusError::OutOfEeprom,
            status::ILLEGAL_COMMAND_CODE => StatusError::IllegalCommandCode,
            status::INTEGRITY_ERROR => StatusError::IntegrityError,
            status::NO_SUCH_KEY => StatusError::NoSuchKey,
            status::LENGTH_ERROR => StatusError::LengthError,
            status::PERMISSION_DENIED => StatusError::PermissionDenied,
            status::PARAMETER_ERROR => StatusError::ParameterError,
            status::APPLICATION_NOT_FOUND => StatusError::ApplicationNotFound,
            status::APPLICATION_INTEGRITY_ERROR => StatusError::ApplicationIntegrityError,
            status::AUTHENTICATION_ERROR => StatusError::AuthenticationError,
            status::BOUNDARY_ERROR => StatusError::BoundaryError,
            status::PICC_INTEGRITY_ERROR => StatusError::PiccIntegrityError,
            status::COMMAND_ABORTED => StatusError::CommandAborted,
            status::PICC_DISABLED => StatusError::PiccDisabled,
            status::COUNT_ERROR => StatusError::CountError,
            status::DUPLICATE_ERROR => StatusError::DuplicateError,
            status::EEPROM_ERROR => StatusError::EepromError,
            status::FILE_NOT_FOUND => StatusError::FileNotFound,
            status::FILE_INTEGRITY_ERROR => StatusError::FileIntegrityError,
            _ => return None,
        };
        Some(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
