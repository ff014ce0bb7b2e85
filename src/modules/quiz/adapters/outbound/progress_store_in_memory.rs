// In memory implementation of the ProgressStore port.
//
// Purpose
// - Hold every user's quiz progress for the lifetime of the process.
//
// Responsibilities
// - Create user state lazily and never reset it.
// - Apply appended events through `evolve`.
// - Enforce optimistic concurrency by checking the expected version, so two
//   concurrent submissions for the same user cannot both advance progress.

use crate::modules::quiz::adapters::outbound::progress_store::{
    LoadedProgress, ProgressStore, ProgressStoreError,
};
use crate::modules::quiz::core::events::QuizEvent;
use crate::modules::quiz::core::evolve::evolve;
use crate::modules::quiz::core::state::UserState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProgressStore {
    inner: RwLock<HashMap<String, LoadedProgress>>,
    offline: AtomicBool,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inner = users
            .into_iter()
            .map(|user| {
                (
                    user.into(),
                    LoadedProgress {
                        state: UserState::default(),
                        version: 0,
                    },
                )
            })
            .collect();
        Self {
            inner: RwLock::new(inner),
            offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), ProgressStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ProgressStoreError::Backend("Progress store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn load(&self, user: &str) -> Result<Option<LoadedProgress>, ProgressStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(user).cloned())
    }

    async fn create_if_absent(&self, user: &str) -> Result<bool, ProgressStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(user) {
            return Ok(false);
        }
        guard.insert(
            user.to_string(),
            LoadedProgress {
                state: UserState::default(),
                version: 0,
            },
        );
        Ok(true)
    }

    async fn append(
        &self,
        user: &str,
        expected_version: i64,
        events: &[QuizEvent],
    ) -> Result<(), ProgressStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let entry = guard
            .get_mut(user)
            .ok_or_else(|| ProgressStoreError::UnknownUser(user.to_string()))?;
        if entry.version != expected_version {
            return Err(ProgressStoreError::VersionMismatch {
                expected: expected_version,
                actual: entry.version,
            });
        }
        let state = std::mem::take(&mut entry.state);
        entry.state = events.iter().cloned().fold(state, evolve);
        entry.version += events.len() as i64;
        Ok(())
    }
}
