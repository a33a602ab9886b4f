pub mod mock;

pub use mock::{MockDigitalInputProvider, MockDigitalOutputProvider};

use std::sync::Arc;

use crate::config::{DigitalState, InputConfig, OutputConfig};
use crate::error::GpioError;
use crate::handle::EventSink;

pub trait DigitalOutputProvider: Send + Sync {
    fn name(&self) -> &str;
    fn open_output(&self, config: &OutputConfig) -> Result<Arc<dyn OutputLine>, GpioError>;
}

pub trait DigitalInputProvider: Send + Sync {
    fn name(&self) -> &str;
    fn open_input(
        &self,
        config: &InputConfig,
        sink: EventSink,
    ) -> Result<Arc<dyn InputLine>, GpioError>;
}

pub trait OutputLine: Send + Sync {
    fn write(&self, state: DigitalState) -> Result<(), GpioError>;
}

pub trait InputLine: Send + Sync {
    fn read(&self) -> Result<DigitalState, GpioError>;
    fn close(&self);
}
