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

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while staging configs or loading device snapshots.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config store cannot take another device.
    #[error("Config store full: cannot stage more than {0} device configs")]
    StoreFull(usize),
    /// Device snapshot file does not exist.
    #[error("Device file not found: {0}")]
    NotFound(PathBuf),
    /// Two devices in a snapshot share an identifier.
    #[error("Duplicate device identifier: {0}")]
    DuplicateDevice(String),
    /// Device snapshot is not valid TOML.
    #[error("Invalid device file: {0}")]
    Toml(#[from] toml::de::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
