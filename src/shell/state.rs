use crate::modules::quiz::adapters::outbound::credentials::{
    CredentialResolver, EmailCredentialResolver,
};
use crate::modules::quiz::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
use crate::modules::quiz::use_cases::next_question::handler::NextQuestionHandler;
use crate::modules::quiz::use_cases::start_quiz::handler::StartQuizHandler;
use crate::modules::quiz::use_cases::submit_answer::handler::SubmitAnswerHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialResolver>,
    pub start_handler: Arc<StartQuizHandler<InMemoryProgressStore>>,
    pub next_handler: Arc<NextQuestionHandler<InMemoryProgressStore>>,
    pub submit_handler: Arc<SubmitAnswerHandler<InMemoryProgressStore>>,
}

impl AppState {
    pub fn in_memory(store: Arc<InMemoryProgressStore>) -> Self {
        Self {
            credentials: Arc::new(EmailCredentialResolver::new(store.clone())),
            start_handler: Arc::new(StartQuizHandler::new(store.clone())),
            next_handler: Arc::new(NextQuestionHandler::new(store.clone())),
            submit_handler: Arc::new(SubmitAnswerHandler::new(store)),
        }
    }
}
