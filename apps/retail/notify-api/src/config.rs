//! Configuration for the notification API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_notifications::NotifierConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub notifier: NotifierConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            notifier: NotifierConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("9090")),
                ("RESEND_API_KEY", Some("re_test")),
                ("SUPABASE_URL", Some("https://project.supabase.co")),
                ("SUPABASE_SERVICE_ROLE_KEY", Some("service-role")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "retail_notify_api");
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 9090);
                assert!(config.notifier.directory.is_some());
            },
        );
    }

    #[test]
    fn test_missing_api_key_fails() {
        temp_env::with_var_unset("RESEND_API_KEY", || {
            assert!(Config::from_env().is_err());
        });
    }
}
