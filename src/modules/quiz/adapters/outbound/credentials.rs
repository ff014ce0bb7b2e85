use crate::modules::quiz::adapters::outbound::progress_store::{ProgressStore, ProgressStoreError};
use crate::modules::quiz::core::identity::Identity;
use async_trait::async_trait;
use std::sync::Arc;

/// Turns an opaque bearer credential into a known identity.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<Identity>, ProgressStoreError>;
}

/// Accepts the user's email as the credential, as long as the user has
/// started the quiz.
pub struct EmailCredentialResolver<TStore>
where
    TStore: ProgressStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EmailCredentialResolver<TStore>
where
    TStore: ProgressStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<TStore> CredentialResolver for EmailCredentialResolver<TStore>
where
    TStore: ProgressStore + 'static,
{
    async fn resolve(&self, token: &str) -> Result<Option<Identity>, ProgressStoreError> {
        Ok(self
            .store
            .load(token)
            .await?
            .map(|_| Identity::new(token)))
    }
}

#[cfg(test)]
mod email_credential_resolver_tests {
    use super::*;
    use crate::modules::quiz::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_a_known_email() {
        let store = Arc::new(InMemoryProgressStore::seeded(["a@b.com"]));
        let resolver = EmailCredentialResolver::new(store);
        assert_eq!(
            resolver.resolve("a@b.com").await.unwrap(),
            Some(Identity::new("a@b.com"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_resolve_an_unknown_email() {
        let store = Arc::new(InMemoryProgressStore::new());
        let resolver = EmailCredentialResolver::new(store);
        assert_eq!(resolver.resolve("a@b.com").await.unwrap(), None);
    }
}
