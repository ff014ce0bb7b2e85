use crate::modules::quiz::adapters::outbound::progress_store::ProgressStore;
use crate::modules::quiz::core::catalog;
use crate::modules::quiz::core::identity::Identity;
use crate::modules::quiz::core::question::Question;
use crate::modules::quiz::core::state::AnsweredQuestion;
use crate::modules::quiz::use_cases::errors::ApplicationError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    Pending(&'static Question),
    Completed { answers: Vec<AnsweredQuestion> },
}

pub struct NextQuestionHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> NextQuestionHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<NextStep, ApplicationError> {
        let loaded = self
            .store
            .load(identity.as_str())
            .await?
            .ok_or_else(|| ApplicationError::UnknownUser(identity.to_string()))?;

        match catalog::at(loaded.state.progress) {
            Some(question) => Ok(NextStep::Pending(question)),
            None => Ok(NextStep::Completed {
                answers: loaded.state.answered_questions,
            }),
        }
    }
}
