// librc522/src/device/builder.rs

use crate::config::ReaderConfig;
use crate::device::handle::{Reader, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (SPI, simulator, mock)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Reader::with_config(t, self.config)),
            None => Err(Error::Transport("no transport configured".into())),
        }
    }

    /// Build and run the initialization sequence.
    pub fn build(self) -> Result<Reader<crate::device::Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
