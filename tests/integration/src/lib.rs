//! Integration test utilities for the Community Connect API
//!
//! Spawns the full router against a real PostgreSQL database and drives it
//! over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
