use crate::modules::quiz::adapters::outbound::progress_store::{ProgressStore, ProgressStoreError};
use crate::modules::quiz::core::catalog;
use crate::modules::quiz::core::identity::Identity;
use crate::modules::quiz::use_cases::errors::ApplicationError;
use crate::modules::quiz::use_cases::submit_answer::decide::decide_submit;
use crate::modules::quiz::use_cases::submit_answer::decision::Decision;
use std::sync::Arc;

/// Every competing append that wins records a new answer for the user, so
/// after `catalog::len()` lost races the next attempt cannot conflict.
fn max_attempts() -> usize {
    catalog::len() + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// `recorded` is false when the question had already been answered.
    Correct { recorded: bool },
    Wrong,
}

pub struct SubmitAnswerHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitAnswerHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        question_id: u32,
        answer: &str,
    ) -> Result<SubmissionOutcome, ApplicationError> {
        let question = catalog::find_by_id(question_id)
            .ok_or(ApplicationError::QuestionNotFound(question_id))?;
        let user = identity.as_str();

        let attempts = max_attempts();
        for attempt in 1..=attempts {
            let loaded = self
                .store
                .load(user)
                .await?
                .ok_or_else(|| ApplicationError::UnknownUser(user.to_string()))?;

            let events = match decide_submit(&loaded.state, question, answer) {
                Decision::Rejected { reason } => {
                    tracing::debug!(user, question_id, %reason, "answer rejected");
                    return Ok(SubmissionOutcome::Wrong);
                }
                Decision::Accepted { events } if events.is_empty() => {
                    return Ok(SubmissionOutcome::Correct { recorded: false });
                }
                Decision::Accepted { events } => events,
            };

            match self.store.append(user, loaded.version, &events).await {
                Ok(()) => {
                    tracing::info!(user, question_id, "answer recorded");
                    return Ok(SubmissionOutcome::Correct { recorded: true });
                }
                Err(ProgressStoreError::VersionMismatch { expected, actual }) => {
                    tracing::warn!(user, attempt, expected, actual, "concurrent progress update");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ApplicationError::Conflict {
            user: user.to_string(),
            attempts,
        })
    }
}
