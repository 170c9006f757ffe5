use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, error};

use super::{DirectoryUser, UserDirectory};
use crate::config::DirectoryConfig;
use crate::error::{NotificationError, NotificationResult};

/// Looks administrators up in a PostgREST `users` table.
///
/// Built with `None` when the deployment has no directory; every lookup then fails.
pub struct PostgrestDirectory {
    config: Option<DirectoryConfig>,
    client: Client,
}

impl PostgrestDirectory {
    pub fn new(config: Option<DirectoryConfig>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl UserDirectory for PostgrestDirectory {
    async fn list_admins(&self) -> NotificationResult<Vec<DirectoryUser>> {
        let config = self.config.as_ref().ok_or_else(|| {
            NotificationError::lookup("user directory is not configured", Value::Null)
        })?;

        let url = format!("{}/rest/v1/users", config.endpoint.trim_end_matches('/'));
        debug!(url = %url, "Fetching administrators");

        let response = self
            .client
            .get(&url)
            .query(&[("is_admin", "eq.true"), ("select", "email,name")])
            .header("apikey", &config.credential)
            .bearer_auth(&config.credential)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Directory request failed");
                NotificationError::lookup(e.to_string(), Value::Null)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(status = %status, error = %e, "Failed to read directory response");
            NotificationError::lookup(e.to_string(), Value::Null)
        })?;

        if !status.is_success() {
            error!(status = %status, error = %body, "Directory rejected the query");
            let details = serde_json::from_str(&body).unwrap_or_else(|_| json!({ "message": body }));
            return Err(NotificationError::lookup(
                format!("directory returned {status}"),
                details,
            ));
        }

        serde_json::from_str::<Vec<DirectoryUser>>(&body).map_err(|e| {
            error!(error = %e, "Directory returned an unexpected payload");
            NotificationError::lookup(e.to_string(), Value::Null)
        })
    }
}
