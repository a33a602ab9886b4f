use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::trace;
use parking_lot::{Mutex, RwLock};

use crate::config::{DigitalState, InputConfig, OutputConfig, Pull};
use crate::debounce::DebounceFilter;
use crate::error::GpioError;
use crate::event::{Dispatcher, ListenerToken, StateEvent, StateListener};
use crate::provider::{InputLine, OutputLine};

pub(crate) struct InputPipeline {
    filter: DebounceFilter,
    dispatcher: Dispatcher,
}

pub(crate) struct InputCore {
    config: InputConfig,
    // Serializes debounce + dispatch per handle; release takes it first so
    // an in-flight dispatch always completes before the handle dies.
    pipeline: Mutex<InputPipeline>,
    state: RwLock<DigitalState>,
    released: AtomicBool,
}

impl InputCore {
    pub(crate) fn new(config: InputConfig) -> Self {
        let filter = DebounceFilter::new(config.debounce);
        Self {
            config,
            pipeline: Mutex::new(InputPipeline {
                filter,
                dispatcher: Dispatcher::default(),
            }),
            state: RwLock::new(DigitalState::Low),
            released: AtomicBool::new(false),
        }
    }

    pub(crate) fn seed_state(&self, state: DigitalState) {
        *self.state.write() = state;
    }

    fn process_raw(&self, state: DigitalState, at: Instant) -> bool {
        if self.released.load(Ordering::Acquire) {
            return false;
        }
        let mut pipeline = self.pipeline.lock();
        // Release may have won the lock race.
        if self.released.load(Ordering::Acquire) {
            return false;
        }
        if !pipeline.filter.accept(at) {
            trace!(
                "input {}: raw {state:?} discarded by debounce",
                self.config.address
            );
            return false;
        }
        *self.state.write() = state;
        pipeline
            .dispatcher
            .dispatch(&StateEvent::new(state), self.config.address);
        true
    }

    fn release(&self) {
        let mut pipeline = self.pipeline.lock();
        self.released.store(true, Ordering::Release);
        pipeline.dispatcher.clear();
    }
}

// Raw-event entry point handed to the input provider. Pushes run the
// debounce filter and listener fan-out synchronously on the calling thread.
#[derive(Clone)]
pub struct EventSink {
    core: Arc<InputCore>,
}

impl EventSink {
    pub(crate) fn new(core: Arc<InputCore>) -> Self {
        Self { core }
    }

    pub fn push(&self, state: DigitalState) -> bool {
        self.push_at(state, Instant::now())
    }

    pub fn push_at(&self, state: DigitalState, at: Instant) -> bool {
        self.core.process_raw(state, at)
    }
}

#[derive(Clone)]
pub struct InputHandle {
    core: Arc<InputCore>,
    line: Arc<dyn InputLine>,
}

impl InputHandle {
    pub(crate) fn new(core: Arc<InputCore>, line: Arc<dyn InputLine>) -> Self {
        Self { core, line }
    }

    pub fn address(&self) -> u32 {
        self.core.config.address
    }

    pub fn id(&self) -> Option<&str> {
        self.core.config.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.core.config.name.as_deref()
    }

    pub fn pull(&self) -> Pull {
        self.core.config.pull
    }

    fn ensure_live(&self) -> Result<(), GpioError> {
        if self.core.released.load(Ordering::Acquire) {
            return Err(GpioError::HandleReleased);
        }
        Ok(())
    }

    pub fn state(&self) -> Result<DigitalState, GpioError> {
        self.ensure_live()?;
        Ok(*self.core.state.read())
    }

    pub fn add_listener<L>(&self, listener: L) -> Result<ListenerToken, GpioError>
    where
        L: StateListener + 'static,
    {
        let mut pipeline = self.core.pipeline.lock();
        self.ensure_live()?;
        Ok(pipeline.dispatcher.add(Box::new(listener)))
    }

    pub fn remove_listener(&self, token: ListenerToken) -> Result<bool, GpioError> {
        let mut pipeline = self.core.pipeline.lock();
        self.ensure_live()?;
        Ok(pipeline.dispatcher.remove(token))
    }

    pub fn release(&self) {
        self.core.release();
        self.line.close();
    }
}

struct OutputCore {
    config: OutputConfig,
    line: Arc<dyn OutputLine>,
    state: RwLock<DigitalState>,
    released: AtomicBool,
}

#[derive(Clone)]
pub struct OutputHandle {
    core: Arc<OutputCore>,
}

impl OutputHandle {
    pub(crate) fn new(config: OutputConfig, line: Arc<dyn OutputLine>) -> Self {
        Self {
            core: Arc::new(OutputCore {
                config,
                line,
                state: RwLock::new(DigitalState::Low),
                released: AtomicBool::new(false),
            }),
        }
    }

    pub fn address(&self) -> u32 {
        self.core.config.address
    }

    pub fn id(&self) -> Option<&str> {
        self.core.config.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.core.config.name.as_deref()
    }

    fn ensure_live(&self) -> Result<(), GpioError> {
        if self.core.released.load(Ordering::Acquire) {
            return Err(GpioError::HandleReleased);
        }
        Ok(())
    }

    fn write(&self, state: DigitalState) -> Result<(), GpioError> {
        self.ensure_live()?;
        self.core.line.write(state)?;
        *self.core.state.write() = state;
        Ok(())
    }

    pub fn set_high(&self) -> Result<(), GpioError> {
        self.write(DigitalState::High)
    }

    pub fn set_low(&self) -> Result<(), GpioError> {
        self.write(DigitalState::Low)
    }

    pub fn state(&self) -> Result<DigitalState, GpioError> {
        self.ensure_live()?;
        Ok(*self.core.state.read())
    }

    pub fn release(&self) {
        self.core.released.store(true, Ordering::Release);
    }
}
