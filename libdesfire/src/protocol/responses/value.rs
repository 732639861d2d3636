// libdesfire/src/protocol/responses/value.rs

use crate::constants::size;
use crate::protocol::parser;
use crate::types::ValueBalance;
use crate::Result;

/// Decode a GetValue payload: exactly 4 bytes, signed, least significant
/// byte first (the byte order every multi-byte integer on this card uses).
pub fn decode_value(data: &[u8]) -> Result<ValueBalance> {
    parser::expect_len(data, size::VALUE)?;
    Ok(ValueBalance::new(parser::le_i32_at(data, 0)?))
}
