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

//! Device registry tests
//!
//! Tests for device snapshots and the TOML-backed registry:
//! - Send-events state reported by snapshots
//! - Lookup by exact identifier
//! - Loading from TOML text and files

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;
use SendEventsMode::{Disabled, DisabledOnExternalMouse, Enabled};

const SNAPSHOT: &str = r#"
[[device]]
identifier = "1267:12377:ELAN1300:00_04F3:3059_Touchpad"
send_events = "enabled"
supported = ["disabled", "disabled_on_external_mouse"]

[[device]]
identifier = "1133:49970:Logitech_Gaming_Mouse_G502"
send_events = "disabled"
supported = ["disabled"]

[[device]]
identifier = "0:1:Power_Button"
"#;

#[test]
fn test_snapshot_reports_state() {
    let device = DeviceSnapshot::new("1:1:Touchpad", Enabled, &[Disabled]);
    let state = device.send_events().unwrap();

    assert_eq!(state.current, Enabled);
    assert_eq!(state.supported, SupportedModes::DISABLED);
}

#[test]
fn test_snapshot_without_control() {
    let device = DeviceSnapshot::without_control("0:1:Power_Button");
    assert_eq!(device.identifier(), "0:1:Power_Button");
    assert!(device.send_events().is_none());
}

#[test]
fn test_find_exact_match_only() {
    let list = DeviceList::new(vec![
        DeviceSnapshot::new("1:1:Touchpad", Enabled, &[]),
        DeviceSnapshot::new("2:2:Mouse", Disabled, &[Disabled]),
    ])
    .unwrap();

    assert_eq!(list.find("2:2:Mouse").map(|d| d.identifier()), Some("2:2:Mouse"));
    assert!(list.find("2:2:mouse").is_none());
    assert!(list.find("2:2").is_none());
    assert!(list.find("*").is_none());
}

#[test]
fn test_devices_keep_order() {
    let list = DeviceList::from_toml(SNAPSHOT).unwrap();
    let ids: Vec<&str> = list.devices().into_iter().map(|d| d.identifier()).collect();

    assert_eq!(
        ids,
        vec![
            "1267:12377:ELAN1300:00_04F3:3059_Touchpad",
            "1133:49970:Logitech_Gaming_Mouse_G502",
            "0:1:Power_Button",
        ]
    );
}

#[test]
fn test_from_toml_parses_modes() {
    let list = DeviceList::from_toml(SNAPSHOT).unwrap();
    assert_eq!(list.len(), 3);

    let touchpad = list.find("1267:12377:ELAN1300:00_04F3:3059_Touchpad").unwrap();
    let state = touchpad.send_events().unwrap();
    assert_eq!(state.current, Enabled);
    assert!(state.supported.supports(DisabledOnExternalMouse));

    assert!(list.find("0:1:Power_Button").unwrap().send_events().is_none());
}

#[test]
fn test_from_toml_empty() {
    let list = DeviceList::from_toml("").unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_from_toml_rejects_unknown_mode() {
    let result = DeviceList::from_toml(
        r#"
        [[device]]
        identifier = "1:1:Touchpad"
        send_events = "sometimes"
        "#,
    );
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_duplicate_identifiers_rejected() {
    let result = DeviceList::new(vec![
        DeviceSnapshot::new("1:1:Touchpad", Enabled, &[]),
        DeviceSnapshot::without_control("1:1:Touchpad"),
    ]);
    assert!(matches!(result, Err(ConfigError::DuplicateDevice(id)) if id == "1:1:Touchpad"));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();

    let list = DeviceList::load(file.path()).unwrap();
    assert_eq!(list.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("devices.toml");

    assert!(matches!(DeviceList::load(&path), Err(ConfigError::NotFound(p)) if p == path));
}
