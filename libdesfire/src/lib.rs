// libdesfire/src/lib.rs

//! libdesfire
//!
//! Read-only command engine for DESFire-family contactless cards: wire
//! framing, status handling, multi-frame reassembly and decoders for the
//! card's directory and file structures. The radio link is supplied by the
//! caller through [`transport::Transport`].
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transit;
pub mod transport;
pub mod types;
pub mod utils;

// `crate::Error`, `crate::Result` and the newtypes in `types` at the root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
