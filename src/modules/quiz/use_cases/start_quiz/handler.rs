use crate::modules::quiz::adapters::outbound::progress_store::ProgressStore;
use crate::modules::quiz::core::identity::Identity;
use crate::modules::quiz::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct StartQuizHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> StartQuizHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Registers the email if it is new. Existing progress is kept.
    pub async fn handle(&self, email: &str) -> Result<Identity, ApplicationError> {
        if self.store.create_if_absent(email).await? {
            tracing::info!(user = email, "quiz started");
        } else {
            tracing::debug!(user = email, "quiz already started, keeping progress");
        }
        Ok(Identity::new(email))
    }
}
