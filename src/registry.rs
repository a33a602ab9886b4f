use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::GpioError;
use crate::provider::{DigitalInputProvider, DigitalOutputProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoKind {
    DigitalInput,
    DigitalOutput,
}

impl fmt::Display for IoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoKind::DigitalInput => write!(f, "digital-input"),
            IoKind::DigitalOutput => write!(f, "digital-output"),
        }
    }
}

#[derive(Clone)]
pub enum Provider {
    DigitalInput(Arc<dyn DigitalInputProvider>),
    DigitalOutput(Arc<dyn DigitalOutputProvider>),
}

impl Provider {
    pub fn kind(&self) -> IoKind {
        match self {
            Provider::DigitalInput(_) => IoKind::DigitalInput,
            Provider::DigitalOutput(_) => IoKind::DigitalOutput,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Provider::DigitalInput(p) => p.name(),
            Provider::DigitalOutput(p) => p.name(),
        }
    }
}

// Populated before the context takes ownership; read-only afterwards.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: FxHashMap<IoKind, Provider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Provider) -> Result<(), GpioError> {
        let kind = provider.kind();
        if self.providers.contains_key(&kind) {
            return Err(GpioError::DuplicateProvider(kind));
        }
        self.providers.insert(kind, provider);
        Ok(())
    }

    pub fn resolve(&self, kind: IoKind) -> Result<&Provider, GpioError> {
        self.providers
            .get(&kind)
            .ok_or(GpioError::UnsupportedKind(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (IoKind, &str)> {
        self.providers.iter().map(|(kind, p)| (*kind, p.name()))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub(crate) fn digital_output(&self) -> Result<&Arc<dyn DigitalOutputProvider>, GpioError> {
        match self.resolve(IoKind::DigitalOutput)? {
            Provider::DigitalOutput(p) => Ok(p),
            _ => Err(GpioError::UnsupportedKind(IoKind::DigitalOutput)),
        }
    }

    pub(crate) fn digital_input(&self) -> Result<&Arc<dyn DigitalInputProvider>, GpioError> {
        match self.resolve(IoKind::DigitalInput)? {
            Provider::DigitalInput(p) => Ok(p),
            _ => Err(GpioError::UnsupportedKind(IoKind::DigitalInput)),
        }
    }
}
