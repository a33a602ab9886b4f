use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use parking_lot::Mutex;

use crate::config::{InputConfigBuilder, OutputConfig};
use crate::error::GpioError;
use crate::handle::{EventSink, InputCore, InputHandle, OutputHandle};
use crate::registry::ProviderRegistry;

enum OwnedHandle {
    Output(OutputHandle),
    Input(InputHandle),
}

impl OwnedHandle {
    fn release(&self) {
        match self {
            OwnedHandle::Output(h) => h.release(),
            OwnedHandle::Input(h) => h.release(),
        }
    }
}

struct ContextInner {
    registry: ProviderRegistry,
    handles: Mutex<Vec<OwnedHandle>>,
    closed: AtomicBool,
}

impl ContextInner {
    fn ensure_active(&self) -> Result<(), GpioError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(GpioError::ContextClosed);
        }
        Ok(())
    }

    // Shutdown flips `closed` under the handle table lock, so re-checking
    // here guarantees no handle is tracked into a terminal context.
    fn track(&self, handle: OwnedHandle) -> Result<(), GpioError> {
        let mut handles = self.handles.lock();
        if self.closed.load(Ordering::Acquire) {
            handle.release();
            return Err(GpioError::ContextClosed);
        }
        handles.push(handle);
        Ok(())
    }

    fn create_output(&self, config: OutputConfig) -> Result<OutputHandle, GpioError> {
        self.ensure_active()?;
        let provider = self.registry.digital_output()?.clone();
        let line = provider.open_output(&config)?;
        let handle = OutputHandle::new(config, line);
        self.track(OwnedHandle::Output(handle.clone()))?;
        Ok(handle)
    }
}

#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

impl Context {
    pub fn new(registry: ProviderRegistry) -> Self {
        info!("Context created with {} provider(s)", registry.len());
        Self {
            inner: Arc::new(ContextInner {
                registry,
                handles: Mutex::new(Vec::new()),
                closed: AtomicBool::new(false),
            }),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.inner.registry
    }

    pub fn is_shutdown(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    pub fn digital_output(&self) -> DigitalOutput {
        DigitalOutput {
            inner: self.inner.clone(),
        }
    }

    pub fn create(&self, builder: InputConfigBuilder) -> Result<InputHandle, GpioError> {
        self.inner.ensure_active()?;
        let config = builder.build()?;
        let provider = self.inner.registry.digital_input()?.clone();

        let core = Arc::new(InputCore::new(config.clone()));
        let line = provider.open_input(&config, EventSink::new(core.clone()))?;
        core.seed_state(line.read()?);

        let handle = InputHandle::new(core, line);
        self.inner.track(OwnedHandle::Input(handle.clone()))?;
        Ok(handle)
    }

    pub fn shutdown(&self) {
        let mut handles = self.inner.handles.lock();
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let drained: Vec<OwnedHandle> = handles.drain(..).collect();
        drop(handles);

        // Input release blocks on the handle's pipeline lock, so any
        // in-flight dispatch completes before its handle is torn down.
        for handle in &drained {
            handle.release();
        }
        info!("Context shut down, released {} handle(s)", drained.len());
    }
}

pub struct DigitalOutput {
    inner: Arc<ContextInner>,
}

impl DigitalOutput {
    pub fn create(&self, address: u32) -> Result<OutputHandle, GpioError> {
        self.inner.create_output(OutputConfig::new(address))
    }

    pub fn create_with(&self, config: OutputConfig) -> Result<OutputHandle, GpioError> {
        self.inner.create_output(config)
    }
}
