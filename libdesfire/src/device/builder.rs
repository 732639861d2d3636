// libdesfire/src/device/builder.rs

use crate::device::handle::Device;
use crate::protocol::EngineConfig;
use crate::transport::Transport;

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: EngineConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the transport (platform binding, `MockTransport`, ...).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Cap on physical frames per logical command.
    pub fn max_frames(mut self, max_frames: usize) -> Self {
        self.config.max_frames = max_frames;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. Returns `None` when no transport was provided.
    pub fn build(self) -> Option<Device> {
        self.transport
            .map(|t| Device::with_config(t, self.config))
    }
}
