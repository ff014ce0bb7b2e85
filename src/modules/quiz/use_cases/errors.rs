use crate::modules::quiz::adapters::outbound::progress_store::ProgressStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] ProgressStoreError),

    #[error("user not found: {0}")]
    UnknownUser(String),

    #[error("question not found: {0}")]
    QuestionNotFound(u32),

    #[error("gave up after {attempts} conflicting updates for {user}")]
    Conflict { user: String, attempts: usize },
}
