pub mod config;
pub mod context;
pub mod debounce;
pub mod error;
pub mod event;
pub mod handle;
pub mod provider;
pub mod registry;

pub use config::{DigitalState, InputConfig, InputConfigBuilder, OutputConfig, Pull};
pub use context::{Context, DigitalOutput};
pub use debounce::DebounceFilter;
pub use error::GpioError;
pub use event::{ListenerResult, ListenerToken, StateEvent, StateListener};
pub use handle::{EventSink, InputHandle, OutputHandle};
pub use provider::{
    DigitalInputProvider, DigitalOutputProvider, InputLine, MockDigitalInputProvider,
    MockDigitalOutputProvider, OutputLine,
};
pub use registry::{IoKind, Provider, ProviderRegistry};
