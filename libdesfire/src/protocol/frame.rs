// libdesfire/src/protocol/frame.rs

use crate::constants::{FRAME_CLASS, FRAME_LE, FRAME_P1, FRAME_P2, MAX_PARAMETER_LEN, TRAILER_MARKER};
use crate::{ProtocolViolation, Result};

/// Build the wrapped command frame sent to the card.
///
/// Format: `[0x90] [cmd] [0x00] [0x00] ([Lc] [params..]) [0x00]`.
/// The length/parameter block is only present when `parameters` is `Some`.
/// Parameters must fit in one length byte; every command this crate issues
/// sends at most 7.
pub fn build_frame(command: u8, parameters: Option<&[u8]>) -> Vec<u8> {
    let params_len = parameters.map_or(0, |p| 1 + p.len());
    let mut out = Vec::with_capacity(4 + params_len + 1);
    out.extend_from_slice(&[FRAME_CLASS, command, FRAME_P1, FRAME_P2]);
    if let Some(params) = parameters {
        debug_assert!(params.len() <= MAX_PARAMETER_LEN);
        out.push(params.len() as u8);
        out.extend_from_slice(params);
    }
    out.push(FRAME_LE);
    out
}

/// One physical response split into payload and status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub payload: &'a [u8],
    pub status: u8,
}

impl<'a> Frame<'a> {
    /// Split a raw response: `[payload..] [0x91] [status]`.
    pub fn split(response: &'a [u8]) -> Result<Self> {
        let [payload @ .., marker, status] = response else {
            return Err(ProtocolViolation::ResponseTooShort {
                actual: response.len(),
            }
            .into());
        };
        if *marker != TRAILER_MARKER {
            return Err(ProtocolViolation::InvalidTrailerMarker { actual: *marker }.into());
        }
        Ok(Self {
            payload,
            status: *status,
        })
    }
}
