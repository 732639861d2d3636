// libdesfire/src/protocol/parser.rs

use crate::{ProtocolViolation, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(ProtocolViolation::UnexpectedLength {
            expected: min,
            actual: data.len(),
        }
        .into());
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn expect_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(ProtocolViolation::UnexpectedLength {
            expected: len,
            actual: data.len(),
        }
        .into());
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy a fixed-size array out of `data` at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut arr = [0u8; N];
    arr.copy_from_slice(slice_at(data, idx, N)?);
    Ok(arr)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Little-endian 24-bit unsigned integer (file sizes, record counts).
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    let [b0, b1, b2] = array_at::<3>(data, idx)?;
    Ok(u32::from_le_bytes([b0, b1, b2, 0]))
}

/// Little-endian signed 32-bit integer (values and limits).
pub fn le_i32_at(data: &[u8], idx: usize) -> Result<i32> {
    Ok(i32::from_le_bytes(array_at::<4>(data, idx)?))
}
