//! Test-session setup for the scorer suites
//!
//! Provides a convenient way to set up an isolated test environment:
//! - Initialize logging (once per process)
//! - Create a private settings file in a temp directory
//! - Install the test API key before any test runs

use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::TempDir;
use tracing::warn;
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::{prelude::*, EnvFilter};
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};
use crate::settings::Settings;

/// API key installed into the settings for the duration of a test session
pub const DEFAULT_TEST_API_KEY: &str = "supersecret";

static INIT: Once = Once::new();

/// Initialize tracing once per process. Level comes from `RUST_LOG` when
/// set, otherwise from `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_fmt::layer())
            .init();
    });
}

/// Best-effort session hook: set the ceramic-cache API key on the given
/// settings and persist them to `path`.
///
/// Session startup must never fail on this optional step, so any error is
/// reported through the return value and a warning instead of propagating.
/// The in-memory settings carry the key even when persisting fails.
pub fn configure_test_session(settings: &mut Settings, path: &Path) -> bool {
    settings.ceramic_cache_api_key = Some(DEFAULT_TEST_API_KEY.to_string());
    match settings.save_to(path) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not persist test API key to {:?}: {:#}", path, e);
            false
        }
    }
}

/// Standard per-session environment with its own settings file
///
/// This encapsulates the common setup pattern used by most scorer tests:
/// 1. Initialize logging
/// 2. Create an isolated temp directory
/// 3. Load settings from a session-unique path
pub struct TestSession {
    dir: TempDir,
    settings_path: PathBuf,
    pub settings: Settings,
}

impl TestSession {
    /// Initialize an isolated session environment
    pub fn init() -> SessionResult<Self> {
        let dir = TempDir::new()?;
        let settings_path = dir.path().join(format!("settings_{}.json", Uuid::new_v4()));

        let settings = Settings::load_from(&settings_path)
            .map_err(|e| SessionError::Settings(format!("{e:#}")))?;
        init_logging(&settings.log_level);

        Ok(Self {
            dir,
            settings_path,
            settings,
        })
    }

    /// Install the test API key; see [`configure_test_session`].
    pub fn configure_api_key(&mut self) -> bool {
        configure_test_session(&mut self.settings, &self.settings_path)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Root of the session's temp directory, for tests that stage files
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_writes_key() {
        let mut session = TestSession::init().unwrap();
        assert!(session.configure_api_key());
        assert_eq!(
            session.settings.ceramic_cache_api_key.as_deref(),
            Some("supersecret")
        );

        let persisted = Settings::load_from(session.settings_path()).unwrap();
        assert_eq!(
            persisted.ceramic_cache_api_key.as_deref(),
            Some("supersecret")
        );
    }

    #[test]
    fn test_configure_survives_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the parent directory should be makes save_to fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("settings.json");

        let mut settings = Settings::default();
        assert!(!configure_test_session(&mut settings, &path));
        // The key is still set in memory
        assert_eq!(
            settings.ceramic_cache_api_key.as_deref(),
            Some("supersecret")
        );
    }

    #[test]
    fn test_sessions_are_isolated() {
        let a = TestSession::init().unwrap();
        let b = TestSession::init().unwrap();
        assert_ne!(a.settings_path(), b.settings_path());
        assert_ne!(a.dir(), b.dir());
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mut session = TestSession::init().unwrap();
        assert!(session.configure_api_key());
        assert!(session.configure_api_key());
        assert_eq!(
            session.settings.ceramic_cache_api_key.as_deref(),
            Some("supersecret")
        );
    }
}
