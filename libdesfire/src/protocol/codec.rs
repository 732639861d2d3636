// libdesfire/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::frame::Frame;
use super::status::{Outcome, classify};

/// Encode a Command into its wire frame.
pub fn encode_command_frame(cmd: &Command) -> Vec<u8> {
    cmd.encode()
}

/// A validated response frame with its status already classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFrame<'a> {
    pub payload: &'a [u8],
    pub outcome: Outcome,
}

/// Validate the trailer of a raw response and classify its status byte.
pub fn decode_response_frame(raw: &[u8]) -> Result<ResponseFrame<'_>> {
    let frame = Frame::split(raw)?;
    Ok(ResponseFrame {
        payload: frame.payload,
        outcome: classify(frame.status),
    })
}
