use crate::modules::quiz::core::events::QuizEvent;
use crate::modules::quiz::core::state::UserState;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProgress {
    pub state: UserState,
    pub version: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Registry of user progress, keyed by the user's email.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn load(&self, user: &str) -> Result<Option<LoadedProgress>, ProgressStoreError>;

    /// Returns `true` when a fresh state was created, `false` when the user
    /// already existed and was left untouched.
    async fn create_if_absent(&self, user: &str) -> Result<bool, ProgressStoreError>;

    async fn append(
        &self,
        user: &str,
        expected_version: i64,
        events: &[QuizEvent],
    ) -> Result<(), ProgressStoreError>;
}
