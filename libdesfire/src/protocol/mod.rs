// libdesfire/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod engine;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use commands::Command;
pub use engine::{EngineConfig, execute, execute_command};
pub use frame::{Frame, build_frame};
pub use responses::*;
pub use status::{Failure, Outcome, classify};
