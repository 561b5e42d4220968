//! Shared fixtures and session setup for stamp-scorer API test suites
//!
//! Tests get sample data from [`fixtures`] and an isolated, pre-configured
//! environment from [`session::TestSession`].

pub mod error;
pub mod fixtures;
pub mod session;
pub mod settings;

// Re-export commonly used items
pub use error::{SessionError, SessionResult};
pub use fixtures::{sample_addresses, sample_providers, sample_stamps, StampFixture};
pub use session::{configure_test_session, TestSession, DEFAULT_TEST_API_KEY};
pub use settings::Settings;
