//! Generic validate → lookup → render → send pipeline.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::directory::UserDirectory;
use crate::error::{NotificationError, NotificationResult};
use crate::notification::{
    DeliveryResult, EmptyDirectoryPolicy, Notification, RecipientStrategy,
};
use crate::providers::{EmailProvider, OutgoingEmail};
use crate::templates::TemplateEngine;

/// Outcome of a dispatch that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Delivered(DeliveryResult),
    /// The directory had no administrators and the variant acknowledges that.
    Skipped,
}

/// Sends notifications through one provider, resolving administrators through one directory.
///
/// Holds no per-request state; one instance serves every variant concurrently.
pub struct NotificationService<P: EmailProvider, D: UserDirectory> {
    provider: P,
    directory: D,
    templates: TemplateEngine,
}

impl<P: EmailProvider, D: UserDirectory> NotificationService<P, D> {
    pub fn new(provider: P, directory: D, templates: TemplateEngine) -> Self {
        Self {
            provider,
            directory,
            templates,
        }
    }

    /// Decode and validate a raw request body.
    pub fn parse<N: Notification>(body: &[u8]) -> NotificationResult<N> {
        let request: N::Request = serde_json::from_slice(body)
            .map_err(|e| NotificationError::Malformed(e.to_string()))?;
        N::from_request(request)
    }

    /// Resolve recipients, render, and hand the email to the provider.
    ///
    /// The directory is consulted before rendering and at most once; the
    /// provider is called at most once and never retried.
    #[instrument(skip_all, fields(variant = %N::KIND))]
    pub async fn dispatch<N: Notification>(&self, notification: &N) -> NotificationResult<Dispatch> {
        let recipients = match notification.recipients() {
            RecipientStrategy::Explicit(recipients) => recipients,
            RecipientStrategy::Administrators(when_empty) => {
                let admins = self.directory.list_admins().await?;
                if admins.is_empty() {
                    warn!("No admin users found");
                    return match when_empty {
                        EmptyDirectoryPolicy::Acknowledge => Ok(Dispatch::Skipped),
                        EmptyDirectoryPolicy::Reject => Err(NotificationError::NoRecipients),
                    };
                }
                debug!(admins = admins.len(), "Resolved administrator recipients");
                admins.into_iter().map(|admin| admin.email).collect()
            }
        };

        let rendered = notification.render(&self.templates)?;
        let email = OutgoingEmail {
            to: recipients,
            subject: rendered.subject,
            html: rendered.html,
        };

        let sent = self.provider.send(&email).await?;
        info!(
            provider = self.provider.name(),
            recipients = email.to.len(),
            message_id = ?sent.message_id,
            "Notification delivered"
        );

        Ok(Dispatch::Delivered(DeliveryResult {
            message_id: sent.message_id,
            recipients: email.to,
            provider_response: sent.response,
        }))
    }

    /// Full request cycle for variant `N`: the success body, or the error to report.
    pub async fn handle<N: Notification>(&self, body: &[u8]) -> NotificationResult<Value> {
        let notification = Self::parse::<N>(body)?;
        Ok(match self.dispatch(&notification).await? {
            Dispatch::Delivered(delivery) => notification.acknowledge(&delivery),
            Dispatch::Skipped => notification.skipped(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectoryUser, MockUserDirectory};
    use crate::providers::MockEmailProvider;
    use crate::variants::{LowStockAlert, NewOrderAdminAlert, WelcomeEmail};
    use serde_json::json;

    fn service(
        provider: MockEmailProvider,
        directory: MockUserDirectory,
    ) -> NotificationService<MockEmailProvider, MockUserDirectory> {
        NotificationService::new(provider, directory, TemplateEngine::new().unwrap())
    }

    fn new_order_body() -> Vec<u8> {
        serde_json::to_vec(&json!({"orderId": "a1b2c3d4", "customerName": "Budi", "totalAmount": 30000}))
            .unwrap()
    }

    #[tokio::test]
    async fn test_explicit_recipient_skips_directory() {
        let provider = MockEmailProvider::new();
        let mut directory = MockUserDirectory::new();
        directory.expect_list_admins().never();
        let service = service(provider.clone(), directory);

        let body = serde_json::to_vec(&json!({"email": "a@b.com", "name": "Dewi"})).unwrap();
        let ack = service.handle::<WelcomeEmail>(&body).await.unwrap();

        assert_eq!(ack["success"], true);
        assert_eq!(ack["message"], "Welcome email sent!");
        let sent = provider.sent_emails().await;
        assert_eq!(sent[0].to, vec!["a@b.com".to_string()]);
    }

    #[tokio::test]
    async fn test_admin_fan_out_is_one_call() {
        let provider = MockEmailProvider::new();
        let mut directory = MockUserDirectory::new();
        directory.expect_list_admins().times(1).returning(|| {
            Ok(vec![
                DirectoryUser::new("owner@shop.id", "Owner"),
                DirectoryUser::new("ops@shop.id", "Ops"),
            ])
        });
        let service = service(provider.clone(), directory);

        let ack = service.handle::<NewOrderAdminAlert>(&new_order_body()).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(ack["adminCount"], 2);
        assert_eq!(ack["sentTo"], json!(["owner@shop.id", "ops@shop.id"]));
    }

    #[tokio::test]
    async fn test_empty_directory_policies_differ() {
        let provider = MockEmailProvider::new();
        let mut directory = MockUserDirectory::new();
        directory.expect_list_admins().times(2).returning(|| Ok(vec![]));
        let service = service(provider.clone(), directory);

        let ack = service.handle::<NewOrderAdminAlert>(&new_order_body()).await.unwrap();
        assert_eq!(ack, json!({"success": false, "message": "No admin users found"}));

        let body = serde_json::to_vec(
            &json!({"products": [{"productName": "Shirt", "currentStock": 0, "category": "Tops"}]}),
        )
        .unwrap();
        let err = service.handle::<LowStockAlert>(&body).await.unwrap_err();
        assert!(matches!(err, NotificationError::NoRecipients));

        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_stops_before_delivery() {
        let provider = MockEmailProvider::new();
        let mut directory = MockUserDirectory::new();
        directory
            .expect_list_admins()
            .returning(|| Err(NotificationError::lookup("connection refused", Value::Null)));
        let service = service(provider.clone(), directory);

        let err = service.handle::<NewOrderAdminAlert>(&new_order_body()).await.unwrap_err();

        assert!(matches!(err, NotificationError::Lookup { .. }));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_validation_happens_before_lookup() {
        let provider = MockEmailProvider::new();
        let mut directory = MockUserDirectory::new();
        directory.expect_list_admins().never();
        let service = service(provider.clone(), directory);

        let err = service.handle::<NewOrderAdminAlert>(b"{}").await.unwrap_err();

        assert!(matches!(err, NotificationError::Validation(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut directory = MockUserDirectory::new();
        directory.expect_list_admins().never();
        let service = service(MockEmailProvider::new(), directory);

        let bodies: [&[u8]; 3] = [b"not json", b"", br#"{"email": 42, "name": "Dewi"}"#];
        for body in bodies {
            let err = service.handle::<WelcomeEmail>(body).await.unwrap_err();
            assert!(matches!(err, NotificationError::Malformed(_)));
        }
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported() {
        let provider = MockEmailProvider::failing(json!({"message": "Invalid API key"}));
        let service = service(provider.clone(), MockUserDirectory::new());

        let body = serde_json::to_vec(&json!({"email": "a@b.com", "name": "Dewi"})).unwrap();
        let err = service.handle::<WelcomeEmail>(&body).await.unwrap_err();

        match err {
            NotificationError::Delivery { details, .. } => {
                assert_eq!(details["message"], "Invalid API key")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(provider.call_count(), 1);
    }
}
