//! Small helpers shared across the crate.
//!
//! Only hex formatting lives here for now: the engine uses it for trace
//! output and the replay example uses the parser for captured sessions.

pub mod hex;

pub use hex::*;
