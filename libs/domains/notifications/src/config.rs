//! Injected configuration for the notification service.
//!
//! Handlers never read the process environment; the binary loads a
//! [`NotifierConfig`] once and hands the pieces to the provider and directory.

use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_required};

use crate::providers::resend::ResendConfig;

/// Sender identity used for every outgoing email unless `EMAIL_FROM` overrides it.
pub const DEFAULT_SENDER: &str = "Retail App <noreply@enaknih-resto.me>";

/// Resend API base URL.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Where administrators are looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL of the PostgREST-compatible endpoint (e.g. a Supabase project URL).
    pub endpoint: String,
    /// Service credential sent as both `apikey` and bearer token.
    pub credential: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifierConfig {
    pub email_api_key: String,
    pub email_from: String,
    pub email_api_url: String,
    /// `None` when the deployment has no directory; admin variants then fail with a lookup error.
    pub directory: Option<DirectoryConfig>,
}

impl NotifierConfig {
    pub fn new(email_api_key: impl Into<String>) -> Self {
        Self {
            email_api_key: email_api_key.into(),
            email_from: DEFAULT_SENDER.to_string(),
            email_api_url: DEFAULT_RESEND_API_URL.to_string(),
            directory: None,
        }
    }

    pub fn with_directory(mut self, endpoint: impl Into<String>, credential: impl Into<String>) -> Self {
        self.directory = Some(DirectoryConfig {
            endpoint: endpoint.into(),
            credential: credential.into(),
        });
        self
    }

    /// Provider settings derived from this config.
    pub fn resend(&self) -> ResendConfig {
        ResendConfig {
            api_key: self.email_api_key.clone(),
            from: self.email_from.clone(),
            api_url: self.email_api_url.clone(),
        }
    }
}

impl FromEnv for NotifierConfig {
    /// - `RESEND_API_KEY`: required
    /// - `EMAIL_FROM`: defaults to [`DEFAULT_SENDER`]
    /// - `RESEND_API_URL`: defaults to [`DEFAULT_RESEND_API_URL`]
    /// - `SUPABASE_URL` + `SUPABASE_SERVICE_ROLE_KEY`: directory, only when both are set
    fn from_env() -> Result<Self, ConfigError> {
        let directory = match (env_optional("SUPABASE_URL"), env_optional("SUPABASE_SERVICE_ROLE_KEY")) {
            (Some(endpoint), Some(credential)) => Some(DirectoryConfig { endpoint, credential }),
            _ => None,
        };

        Ok(Self {
            email_api_key: env_required("RESEND_API_KEY")?,
            email_from: env_or_default("EMAIL_FROM", DEFAULT_SENDER),
            email_api_url: env_or_default("RESEND_API_URL", DEFAULT_RESEND_API_URL),
            directory,
        })
    }
}
