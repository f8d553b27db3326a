//! Config module tests
//!
//! - Store merge and capacity behaviour
//! - Handler context lifecycle
