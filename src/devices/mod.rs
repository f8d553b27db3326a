// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Live input device access
//!
//! Handlers only ever read devices. A compositor backend implements
//! [`InputDevice`] and [`DeviceRegistry`] over its own device list; this
//! module also ships [`DeviceList`], a snapshot loaded from TOML that the
//! CLI and tests use in place of real hardware.
//!
//! # Snapshot format
//!
//! ```toml
//! [[device]]
//! identifier = "1267:12377:ELAN1300:00_04F3:3059_Touchpad"
//! send_events = "enabled"
//! supported = ["disabled", "disabled_on_external_mouse"]
//!
//! # No send_events: the backend exposes no send-events control
//! [[device]]
//! identifier = "0:1:Power_Button"
//! ```
//!
//! # Example
//!
//! ```
//! use input_send_events::devices::{DeviceList, DeviceRegistry};
//!
//! let list = DeviceList::from_toml(r#"
//!     [[device]]
//!     identifier = "1:1:Touchpad"
//!     send_events = "enabled"
//!     supported = ["disabled"]
//! "#)?;
//! assert_eq!(list.devices().len(), 1);
//! # Ok::<(), input_send_events::config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;
use crate::core::types::{SendEventsMode, SupportedModes};

/// Live send-events state reported by a device's backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SendEventsState {
    /// Mode the device is in right now
    pub current: SendEventsMode,

    /// Modes the device can be switched into
    pub supported: SupportedModes,
}

/// Read-only view of one input device.
pub trait InputDevice {
    /// Unique identifier, e.g. `vendor:product:name`
    fn identifier(&self) -> &str;

    /// Queries the device's send-events state.
    ///
    /// Returns `None` if the backend has no send-events control for this
    /// device; toggling such a device is a no-op.
    fn send_events(&self) -> Option<SendEventsState>;
}

/// The live collection of input devices.
///
/// Iteration order is up to the implementation but must not change within
/// one call.
pub trait DeviceRegistry {
    fn devices(&self) -> Vec<&dyn InputDevice>;

    /// Finds the device whose identifier matches exactly.
    fn find(&self, identifier: &str) -> Option<&dyn InputDevice> {
        self.devices()
            .into_iter()
            .find(|device| device.identifier() == identifier)
    }
}

/// A device as recorded in a snapshot file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeviceSnapshot {
    pub identifier: String,

    /// Current mode; absent for devices without send-events control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_events: Option<SendEventsMode>,

    /// Supported modes (`enabled` is implied)
    #[serde(default)]
    pub supported: Vec<SendEventsMode>,
}

impl DeviceSnapshot {
    /// A device with send-events control.
    pub fn new(identifier: &str, current: SendEventsMode, supported: &[SendEventsMode]) -> Self {
        Self {
            identifier: identifier.to_string(),
            send_events: Some(current),
            supported: supported.to_vec(),
        }
    }

    /// A device whose backend cannot be queried.
    pub fn without_control(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            send_events: None,
            supported: Vec::new(),
        }
    }
}

impl InputDevice for DeviceSnapshot {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn send_events(&self) -> Option<SendEventsState> {
        self.send_events.map(|current| SendEventsState {
            current,
            supported: SupportedModes::from_modes(self.supported.iter().copied()),
        })
    }
}

/// In-memory device registry backed by snapshots.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeviceList {
    #[serde(default, rename = "device")]
    devices: Vec<DeviceSnapshot>,
}

impl DeviceList {
    /// Creates a registry from snapshots, rejecting duplicate identifiers.
    pub fn new(devices: Vec<DeviceSnapshot>) -> Result<Self, ConfigError> {
        {
            let mut seen = HashSet::new();
            for device in &devices {
                if !seen.insert(device.identifier.as_str()) {
                    return Err(ConfigError::DuplicateDevice(device.identifier.clone()));
                }
            }
        }
        Ok(Self { devices })
    }

    /// Parses a TOML snapshot.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: DeviceList = toml::from_str(content)?;
        Self::new(parsed.devices)
    }

    /// Reads and parses a TOML snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Toml` if it is malformed and
    /// `ConfigError::DuplicateDevice` if an identifier repeats.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn snapshots(&self) -> &[DeviceSnapshot] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceRegistry for DeviceList {
    fn devices(&self) -> Vec<&dyn InputDevice> {
        self.devices
            .iter()
            .map(|device| device as &dyn InputDevice)
            .collect()
    }
}

#[cfg(test)]
mod tests;
