use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

use super::{DigitalInputProvider, DigitalOutputProvider, InputLine, OutputLine};
use crate::config::{DigitalState, InputConfig, OutputConfig, Pull};
use crate::error::GpioError;
use crate::handle::EventSink;

#[derive(Default)]
pub struct MockDigitalOutputProvider {
    lines: RwLock<FxHashMap<u32, Arc<MockOutputLine>>>, // keyed by address
}

impl MockDigitalOutputProvider {
    pub fn written(&self, address: u32) -> Option<DigitalState> {
        self.lines.read().get(&address).map(|line| *line.value.lock())
    }
}

impl DigitalOutputProvider for MockDigitalOutputProvider {
    fn name(&self) -> &str {
        "mock-digital-output"
    }

    fn open_output(&self, config: &OutputConfig) -> Result<Arc<dyn OutputLine>, GpioError> {
        let line = Arc::new(MockOutputLine {
            value: Mutex::new(DigitalState::Low),
        });
        self.lines.write().insert(config.address, line.clone());
        Ok(line)
    }
}

struct MockOutputLine {
    value: Mutex<DigitalState>,
}

impl OutputLine for MockOutputLine {
    fn write(&self, state: DigitalState) -> Result<(), GpioError> {
        *self.value.lock() = state;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDigitalInputProvider {
    lines: RwLock<FxHashMap<u32, MockInputEntry>>, // keyed by address
}

struct MockInputEntry {
    line: Arc<MockInputLine>,
    sink: EventSink,
}

impl MockDigitalInputProvider {
    pub fn inject(&self, address: u32, state: DigitalState) -> bool {
        self.inject_at(address, state, Instant::now())
    }

    pub fn inject_at(&self, address: u32, state: DigitalState, at: Instant) -> bool {
        let lines = self.lines.read();
        let Some(entry) = lines.get(&address) else {
            return false;
        };
        if !entry.line.open.load(Ordering::Acquire) {
            return false;
        }
        *entry.line.value.lock() = state;
        entry.sink.push_at(state, at)
    }
}

impl DigitalInputProvider for MockDigitalInputProvider {
    fn name(&self) -> &str {
        "mock-digital-input"
    }

    fn open_input(
        &self,
        config: &InputConfig,
        sink: EventSink,
    ) -> Result<Arc<dyn InputLine>, GpioError> {
        let initial = match config.pull {
            Pull::PullUp => DigitalState::High,
            Pull::None | Pull::PullDown => DigitalState::Low,
        };
        let line = Arc::new(MockInputLine {
            value: Mutex::new(initial),
            open: AtomicBool::new(true),
        });
        self.lines.write().insert(
            config.address,
            MockInputEntry {
                line: line.clone(),
                sink,
            },
        );
        Ok(line)
    }
}

struct MockInputLine {
    value: Mutex<DigitalState>,
    open: AtomicBool,
}

impl InputLine for MockInputLine {
    fn read(&self) -> Result<DigitalState, GpioError> {
        Ok(*self.value.lock())
    }

    fn close(&self) {
        self.open.store(false, Ordering::Release);
    }
}
