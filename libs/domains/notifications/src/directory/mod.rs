//! Administrator lookup.

mod memory;
mod postgrest;

pub use memory::InMemoryDirectory;
pub use postgrest::PostgrestDirectory;

use crate::error::NotificationResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A user row projected to the fields notifications need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl DirectoryUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Read-only access to the user directory.
///
/// An empty list is a successful answer; what it means is up to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Every user flagged as administrator.
    async fn list_admins(&self) -> NotificationResult<Vec<DirectoryUser>>;
}
