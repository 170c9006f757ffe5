use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{NotificationError, NotificationResult};
use crate::models::filled;
use crate::notification::{
    DeliveryResult, Notification, NotificationKind, RecipientStrategy, RenderedEmail,
};
use crate::templates::TemplateEngine;

#[derive(Debug, Default, Deserialize)]
pub struct WelcomeEmailRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Greeting sent once an account is created.
#[derive(Debug, Clone)]
pub struct WelcomeEmail {
    pub email: String,
    pub name: String,
}

#[derive(Serialize)]
struct WelcomeView<'a> {
    name: &'a str,
}

impl Notification for WelcomeEmail {
    type Request = WelcomeEmailRequest;

    const KIND: NotificationKind = NotificationKind::Welcome;

    fn from_request(request: WelcomeEmailRequest) -> NotificationResult<Self> {
        match (filled(request.email), filled(request.name)) {
            (Some(email), Some(name)) => Ok(Self { email, name }),
            _ => Err(NotificationError::validation("Email and name are required")),
        }
    }

    fn recipients(&self) -> RecipientStrategy {
        RecipientStrategy::Explicit(vec![self.email.clone()])
    }

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail> {
        Ok(RenderedEmail {
            subject: "Selamat Datang di Retail App! 🎉".to_string(),
            html: templates.render(Self::KIND, &WelcomeView { name: &self.name })?,
        })
    }

    fn acknowledge(&self, delivery: &DeliveryResult) -> Value {
        json!({
            "success": true,
            "message": "Welcome email sent!",
            "data": delivery.provider_response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_email_and_name() {
        let err = WelcomeEmail::from_request(WelcomeEmailRequest {
            email: Some("a@b.com".to_string()),
            name: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Email and name are required");
    }

    #[test]
    fn test_render() {
        let welcome = WelcomeEmail::from_request(WelcomeEmailRequest {
            email: Some("a@b.com".to_string()),
            name: Some("Dewi".to_string()),
        })
        .unwrap();
        let email = welcome.render(&TemplateEngine::new().unwrap()).unwrap();

        assert_eq!(email.subject, "Selamat Datang di Retail App! 🎉");
        assert!(email.html.contains("Halo, Dewi!"));
        assert!(email.html.contains("Melacak pesanan Anda"));
    }
}
