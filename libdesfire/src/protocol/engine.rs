// libdesfire/src/protocol/engine.rs

//! Request/response loop for one logical command.
//!
//! A card answers with at most one physical frame per exchange. When the
//! status byte is ADDITIONAL_FRAME the engine asks for the next frame and
//! keeps appending payload bytes until the card reports success or a failure.

use log::{debug, trace, warn};

use crate::constants::{DEFAULT_MAX_FRAMES, command};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{ProtocolViolation, Result};

use super::codec::decode_response_frame;
use super::commands::Command;
use super::frame::build_frame;
use super::status::Outcome;

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on physical exchanges for one logical command,
    /// the initial request included. Zero is treated as one.
    pub max_frames: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

/// Run `command` to completion and return the reassembled payload.
///
/// The payload buffer lives only inside this call: it is returned on
/// success and dropped on any error. Transport errors are returned as-is.
pub fn execute<T>(
    transport: &mut T,
    command: u8,
    parameters: Option<&[u8]>,
    config: &EngineConfig,
) -> Result<Vec<u8>>
where
    T: Transport + ?Sized,
{
    let limit = config.max_frames.max(1);
    let mut payload = Vec::new();
    let mut request = build_frame(command, parameters);

    for frame_no in 1..=limit {
        trace!("cmd {:#04x} frame {} -> {}", command, frame_no, bytes_to_hex_spaced(&request));
        let raw = transport.transceive(&request)?;
        trace!("cmd {:#04x} frame {} <- {}", command, frame_no, bytes_to_hex_spaced(&raw));

        let frame = decode_response_frame(&raw)?;
        payload.extend_from_slice(frame.payload);

        match frame.outcome {
            Outcome::Success => {
                debug!(
                    "cmd {:#04x} ok: {} byte(s) in {} frame(s)",
                    command,
                    payload.len(),
                    frame_no
                );
                return Ok(payload);
            }
            Outcome::Continue => {
                request = build_frame(command::ADDITIONAL_FRAME, None);
            }
            Outcome::Failure(failure) => {
                debug!("cmd {:#04x} failed: {:?}", command, failure);
                return Err(failure.into());
            }
        }
    }

    warn!("cmd {:#04x} still continuing after {} frames, giving up", command, limit);
    Err(ProtocolViolation::TooManyContinuationFrames { limit }.into())
}

/// Convenience wrapper over [`execute`] for a typed [`Command`].
pub fn execute_command<T>(transport: &mut T, cmd: &Command, config: &EngineConfig) -> Result<Vec<u8>>
where
    T: Transport + ?Sized,
{
    let params = cmd.parameters();
    execute(transport, cmd.command_code(), params.as_deref(), config)
}
