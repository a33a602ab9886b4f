use std::error::Error;

use log::warn;

use crate::config::DigitalState;
use crate::error::GpioError;

#[derive(Debug, Clone, Copy)]
pub struct StateEvent {
    state: DigitalState,
}

impl StateEvent {
    pub(crate) fn new(state: DigitalState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> DigitalState {
        self.state
    }
}

pub type ListenerResult = Result<(), Box<dyn Error + Send + Sync>>;

pub trait StateListener: Send {
    fn on_state_change(&mut self, event: &StateEvent) -> ListenerResult;
}

impl<F> StateListener for F
where
    F: FnMut(&StateEvent) -> ListenerResult + Send,
{
    fn on_state_change(&mut self, event: &StateEvent) -> ListenerResult {
        self(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

// Synchronous fan-out in registration order. A failing listener is logged
// to the context's error sink and skipped, never aborting the fan-out.
#[derive(Default)]
pub(crate) struct Dispatcher {
    listeners: Vec<(ListenerToken, Box<dyn StateListener>)>,
    next_token: u64,
}

impl Dispatcher {
    pub(crate) fn add(&mut self, listener: Box<dyn StateListener>) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, listener));
        token
    }

    pub(crate) fn remove(&mut self, token: ListenerToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        self.listeners.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.listeners.clear();
    }

    pub(crate) fn dispatch(&mut self, event: &StateEvent, address: u32) {
        for (token, listener) in &mut self.listeners {
            if let Err(e) = listener.on_state_change(event) {
                warn!(
                    "{}",
                    GpioError::Listener(format!("input {address}, listener {token:?}: {e}"))
                );
            }
        }
    }
}
