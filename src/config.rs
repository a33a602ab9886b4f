use std::time::Duration;

use crate::error::GpioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalState {
    Low,
    High,
}

impl DigitalState {
    pub fn is_high(&self) -> bool {
        matches!(self, DigitalState::High)
    }

    pub fn toggle(self) -> Self {
        match self {
            DigitalState::Low => DigitalState::High,
            DigitalState::High => DigitalState::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pull {
    #[default]
    None,
    PullUp,
    PullDown,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub address: u32,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl OutputConfig {
    pub fn new(address: u32) -> Self {
        Self {
            address,
            id: None,
            name: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub address: u32,
    pub id: Option<String>,
    pub name: Option<String>,
    pub pull: Pull,
    pub debounce: Duration,
}

impl InputConfig {
    pub fn builder() -> InputConfigBuilder {
        InputConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputConfigBuilder {
    address: Option<u32>,
    id: Option<String>,
    name: Option<String>,
    pull: Pull,
    debounce: Duration,
}

impl InputConfigBuilder {
    pub fn address(mut self, address: u32) -> Self {
        self.address = Some(address);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn build(self) -> Result<InputConfig, GpioError> {
        let address = self
            .address
            .ok_or_else(|| GpioError::InvalidConfig("Input address is required".into()))?;

        Ok(InputConfig {
            address,
            id: self.id,
            name: self.name,
            pull: self.pull,
            debounce: self.debounce,
        })
    }
}
