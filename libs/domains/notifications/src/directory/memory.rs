use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{DirectoryUser, UserDirectory};
use crate::error::{NotificationError, NotificationResult};

/// Fixed administrator list for tests and local runs.
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    admins: Vec<DirectoryUser>,
    lookups: Arc<AtomicUsize>,
    failure: Option<Value>,
}

impl InMemoryDirectory {
    pub fn new(admins: Vec<DirectoryUser>) -> Self {
        Self {
            admins,
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A directory whose every lookup fails with `details`.
    pub fn failing(details: Value) -> Self {
        Self {
            failure: Some(details),
            ..Self::default()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn list_admins(&self) -> NotificationResult<Vec<DirectoryUser>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(details) => Err(NotificationError::lookup(
                "directory unavailable",
                details.clone(),
            )),
            None => Ok(self.admins.clone()),
        }
    }
}
