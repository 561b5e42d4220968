//! Test fixtures for the stamp-scorer suites
//!
//! Fixtures provide reusable sample data for common test scenarios.

mod samples;
mod shared;

pub use samples::*;
pub use shared::*;
