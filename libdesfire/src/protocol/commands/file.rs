// libdesfire/src/protocol/commands/file.rs

use crate::types::FileId;

/// Parameter block carrying only the file number
/// (GetFileSettings 0xF5, GetValue 0x6C).
pub fn encode_file_number(file: FileId) -> [u8; 1] {
    [file.as_u8()]
}

/// Parameter block of ReadData (0xBD) and ReadRecords (0xBB).
/// Layout: file(1) + offset(3, LE) + length(3, LE). Offset and length are
/// both zero, which asks for the whole file (or every record) from the start.
pub fn encode_read_all(file: FileId) -> [u8; 7] {
    [file.as_u8(), 0, 0, 0, 0, 0, 0]
}
