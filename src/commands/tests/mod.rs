//! Command handler tests
//!
//! - `events` set/toggle behaviour, errors and wildcard fan-out
//! - `input` dispatch and script running
//! - Argument validation


use std::cell::Cell;

use crate::core::types::{SendEventsMode, SupportedModes};
use crate::devices::{DeviceRegistry, InputDevice, SendEventsState};

/// Device whose mode can change between queries, like real hardware
pub(crate) struct MockDevice {
    pub identifier: String,
    pub mode: Option<Cell<SendEventsMode>>,
    pub supported: SupportedModes,
}

impl MockDevice {
    pub fn new(identifier: &str, mode: SendEventsMode, supported: SupportedModes) -> Self {
        Self {
            identifier: identifier.to_string(),
            mode: Some(Cell::new(mode)),
            supported,
        }
    }

    pub fn without_control(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            mode: None,
            supported: SupportedModes::empty(),
        }
    }
}

impl InputDevice for MockDevice {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn send_events(&self) -> Option<SendEventsState> {
        self.mode.as_ref().map(|mode| SendEventsState {
            current: mode.get(),
            supported: self.supported,
        })
    }
}

pub(crate) struct MockRegistry(pub Vec<MockDevice>);

impl DeviceRegistry for MockRegistry {
    fn devices(&self) -> Vec<&dyn InputDevice> {
        self.0.iter().map(|d| d as &dyn InputDevice).collect()
    }
}

/// Touchpad, mouse and a device without send-events control
pub(crate) fn laptop() -> MockRegistry {
    MockRegistry(vec![
        MockDevice::new("1:1:Touchpad", SendEventsMode::Enabled, SupportedModes::all()),
        MockDevice::new("2:2:Mouse", SendEventsMode::Disabled, SupportedModes::DISABLED),
        MockDevice::without_control("0:1:Power_Button"),
    ])
}
