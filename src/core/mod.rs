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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for send-events configuration, including:
//! - Type definitions for modes, supported-mode sets and staged configs
//! - The two toggle strategies (supported-mode cycling, candidate lists)
//! - Command line and mode name parsing
//!
//! All logic here is pure: no device access, no config storage, so it can
//! be tested without a compositor.

pub mod parser;
pub mod toggle;
pub mod types;

pub use parser::{parse_mode, parse_mode_ignore_case, ParseError};
pub use toggle::{toggle_select, toggle_supported};
pub use types::*;

#[cfg(test)]
mod tests;
