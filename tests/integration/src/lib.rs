//! Integration test utilities for the EVOA API
//!
//! Spawns the real router against PostgreSQL (and Redis when configured)
//! and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
