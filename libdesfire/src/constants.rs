// libdesfire/src/constants.rs
//! Protocol constants, grouped by layer.

/// Class byte of every wrapped native command frame.
pub const FRAME_CLASS: u8 = 0x90;

/// P1/P2 of a wrapped command frame. Always zero.
pub const FRAME_P1: u8 = 0x00;
pub const FRAME_P2: u8 = 0x00;

/// Le byte closing every command frame.
pub const FRAME_LE: u8 = 0x00;

/// First trailer byte of every card response.
pub const TRAILER_MARKER: u8 = 0x91;

/// Trailer length (marker + status).
pub const TRAILER_LEN: usize = 2;

/// Largest parameter block that fits the single length byte.
pub const MAX_PARAMETER_LEN: usize = 255;

/// Default cap on physical exchanges per logical command.
pub const DEFAULT_MAX_FRAMES: usize = 64;

/// Native command codes (frame-level opcodes).
pub mod command {
    pub const GET_MANUFACTURING_DATA: u8 = 0x60;
    pub const GET_APPLICATION_DIRECTORY: u8 = 0x6A;
    pub const ADDITIONAL_FRAME: u8 = 0xAF;
    pub const SELECT_APPLICATION: u8 = 0x5A;
    pub const READ_DATA: u8 = 0xBD;
    pub const GET_VALUE: u8 = 0x6C;
    pub const READ_RECORD: u8 = 0xBB;
    pub const GET_FILES: u8 = 0x6F;
    pub const GET_FILE_SETTINGS: u8 = 0xF5;
}

/// Status bytes carried in the second trailer byte.
pub mod status {
    pub const OPERATION_OK: u8 = 0x00;
    pub const NO_CHANGES: u8 = 0x0C;
    pub const OUT_OF_EEPROM: u8 = 0x0E;
    pub const ILLEGAL_COMMAND_CODE: u8 = 0x1C;
    pub const INTEGRITY_ERROR: u8 = 0x1E;
    pub const NO_SUCH_KEY: u8 = 0x40;
    pub const LENGTH_ERROR: u8 = 0x7E;
    pub const PERMISSION_DENIED: u8 = 0x9D;
    pub const PARAMETER_ERROR: u8 = 0x9E;
    pub const APPLICATION_NOT_FOUND: u8 = 0xA0;
    pub const APPLICATION_INTEGRITY_ERROR: u8 = 0xA1;
    pub const AUTHENTICATION_ERROR: u8 = 0xAE;
    pub const ADDITIONAL_FRAME: u8 = 0xAF;
    pub const BOUNDARY_ERROR: u8 = 0xBE;
    pub const PICC_INTEGRITY_ERROR: u8 = 0xC1;
    pub const COMMAND_ABORTED: u8 = 0xCA;
    pub const PICC_DISABLED: u8 = 0xCD;
    pub const COUNT_ERROR: u8 = 0xCE;
    pub const DUPLICATE_ERROR: u8 = 0xDE;
    pub const EEPROM_ERROR: u8 = 0xEE;
    pub const FILE_NOT_FOUND: u8 = 0xF0;
    pub const FILE_INTEGRITY_ERROR: u8 = 0xF1;
}

/// Fixed payload sizes of decoded structures.
pub mod size {
    /// Application identifier on the wire.
    pub const APPLICATION_ID: usize = 3;
    /// GetVersion-style manufacturing record.
    pub const MANUFACTURING_DATA: usize = 28;
    /// File settings header: type, comm mode, two access bytes.
    pub const FILE_SETTINGS_HEADER: usize = 4;
    /// Value file payload.
    pub const VALUE: usize = 4;
}
