use thiserror::Error;

use crate::registry::IoKind;

#[derive(Debug, Error)]
pub enum GpioError {
    #[error("No provider registered for {0}")]
    UnsupportedKind(IoKind),
    #[error("Provider already registered for {0}")]
    DuplicateProvider(IoKind),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Context has been shut down")]
    ContextClosed,
    #[error("Handle has been released")]
    HandleReleased,
    #[error("Listener failed: {0}")]
    Listener(String),
}
