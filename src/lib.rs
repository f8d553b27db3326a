// Copyright 2025 bakri (tidynest@proton.me)
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

//! Input Send-Events Toggling
//!
//! Handles the `events` input command of a Wayland compositor: setting an
//! input device's send-events mode, or toggling it based on the mode the
//! device is in right now.
//!
//! # Features
//!
//! - **Direct set:** `events enabled|disabled|disabled_on_external_mouse`
//! - **Supported-mode toggle:** `events toggle` cycles through the modes
//!   the device reports as supported
//! - **List toggle:** `events toggle enabled disabled` cycles through a
//!   user-chosen list
//! - **Wildcard:** `input * events toggle` toggles every device separately
//! - **Structured errors:** Every failure is a typed value, never a panic
//!
//! # Architecture
//!
//! - **`core`:** Modes, toggle algorithms, parsing (pure, no I/O)
//! - **`devices`:** Read-only device traits and a TOML-backed snapshot
//! - **`config`:** Staged configs, the merging store and handler context
//! - **`commands`:** The `input` and `events` command handlers
//!
//! # Examples
//!
//! ## Toggling every device
//!
//! ```
//! use input_send_events::commands::run_command;
//! use input_send_events::config::{HandlerContext, InputConfigStore};
//! use input_send_events::core::SendEventsMode;
//! use input_send_events::devices::{DeviceList, DeviceSnapshot};
//!
//! let devices = DeviceList::new(vec![
//!     DeviceSnapshot::new("1:1:Touchpad", SendEventsMode::Enabled, &[SendEventsMode::Disabled]),
//!     DeviceSnapshot::new("2:2:Mouse", SendEventsMode::Disabled, &[SendEventsMode::Disabled]),
//! ])?;
//! let mut store = InputConfigStore::new();
//! let mut ctx = HandlerContext::new();
//!
//! run_command("input * events toggle", &mut ctx, &devices, &mut store)?;
//!
//! assert_eq!(store.get("1:1:Touchpad").and_then(|c| c.send_events), Some(SendEventsMode::Disabled));
//! assert_eq!(store.get("2:2:Mouse").and_then(|c| c.send_events), Some(SendEventsMode::Enabled));
//! assert_eq!(store.get("*").and_then(|c| c.send_events), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod config;
pub mod core;
pub mod devices;

// Re-export commonly used types for convenience
pub use core::{InputConfig, SendEventsMode, SupportedModes};
