// libdesfire/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::{FnTransport, Transport, from_fn};
