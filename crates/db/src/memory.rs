//! In-memory [`Store`] implementation.
//!
//! Holds all rows in maps behind a `RwLock`. Nothing is persisted; all
//! data is lost when the process exits. Used by the integration tests and
//! for running the server without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sitesmith_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::admin::{Admin, CreateAdmin};
use crate::models::submission::{CreateSubmission, Submission};
use crate::store::{Store, StoreError};

/// An in-memory store backed by `BTreeMap`s. Thread-safe and cheap to clone.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: AtomicI64,
    submissions: RwLock<BTreeMap<DbId, Submission>>,
    admins: RwLock<BTreeMap<DbId, Admin>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self) -> DbId {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_submission(
        &self,
        input: &CreateSubmission,
    ) -> Result<Submission, StoreError> {
        let submission = Submission {
            id: self.assign_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            project_type: input.project_type.clone(),
            description: input.description.clone(),
            budget: input.budget.clone(),
            timeline: input.timeline.clone(),
            created_at: chrono::Utc::now(),
        };
        let mut submissions = self.inner.submissions.write().await;
        submissions.insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>, StoreError> {
        let submissions = self.inner.submissions.read().await;
        let mut rows: Vec<Submission> = submissions.values().cloned().collect();
        // Newest first, id as the deterministic tiebreak (matches the
        // Postgres ORDER BY created_at DESC, id DESC).
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn delete_submission(&self, id: DbId) -> Result<(), StoreError> {
        let mut submissions = self.inner.submissions.write().await;
        submissions.remove(&id);
        Ok(())
    }

    async fn create_admin(&self, input: &CreateAdmin) -> Result<Admin, StoreError> {
        let mut admins = self.inner.admins.write().await;
        if admins.values().any(|a| a.username == input.username) {
            return Err(StoreError::Duplicate { field: "username" });
        }
        let admin = Admin {
            id: self.assign_id(),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            created_at: chrono::Utc::now(),
        };
        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn find_admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        let admins = self.inner.admins.read().await;
        Ok(admins.values().find(|a| a.username == username).cloned())
    }
}
