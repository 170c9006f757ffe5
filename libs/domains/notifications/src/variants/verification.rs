use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::DEFAULT_GREETING_NAME;
use crate::error::{NotificationError, NotificationResult};
use crate::models::{filled, string_or_number};
use crate::notification::{
    DeliveryResult, Notification, NotificationKind, RecipientStrategy, RenderedEmail,
};
use crate::templates::TemplateEngine;

/// How long a code stays valid, as stated in the email.
pub const CODE_VALIDITY_MINUTES: u32 = 15;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCodeRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub verification_code: Option<String>,
}

/// Account verification code for a new customer.
#[derive(Debug, Clone)]
pub struct VerificationCode {
    pub email: String,
    pub name: Option<String>,
    pub code: String,
}

#[derive(Serialize)]
struct VerificationView<'a> {
    name: &'a str,
    code: &'a str,
    valid_minutes: u32,
}

impl Notification for VerificationCode {
    type Request = VerificationCodeRequest;

    const KIND: NotificationKind = NotificationKind::VerificationCode;

    fn from_request(request: VerificationCodeRequest) -> NotificationResult<Self> {
        let (Some(email), Some(code)) = (filled(request.email), filled(request.verification_code))
        else {
            return Err(NotificationError::validation(
                "Email and verification code are required",
            ));
        };

        Ok(Self {
            email,
            name: filled(request.name),
            code,
        })
    }

    fn recipients(&self) -> RecipientStrategy {
        RecipientStrategy::Explicit(vec![self.email.clone()])
    }

    fn render(&self, templates: &TemplateEngine) -> NotificationResult<RenderedEmail> {
        let view = VerificationView {
            name: self.name.as_deref().unwrap_or(DEFAULT_GREETING_NAME),
            code: &self.code,
            valid_minutes: CODE_VALIDITY_MINUTES,
        };

        Ok(RenderedEmail {
            subject: format!("{} - Kode Verifikasi Retail App", self.code),
            html: templates.render(Self::KIND, &view)?,
        })
    }

    fn acknowledge(&self, delivery: &DeliveryResult) -> Value {
        json!({ "success": true, "messageId": delivery.message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: Value) -> VerificationCodeRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_requires_email_and_code() {
        for body in [
            json!({"email": "a@b.com"}),
            json!({"verificationCode": "123456"}),
            json!({"email": "a@b.com", "verificationCode": ""}),
        ] {
            let err = VerificationCode::from_request(request(body)).unwrap_err();
            assert_eq!(err.to_string(), "Email and verification code are required");
        }
    }

    #[test]
    fn test_numeric_code_is_accepted() {
        let verification =
            VerificationCode::from_request(request(json!({"email": "a@b.com", "verificationCode": 123456})))
                .unwrap();
        assert_eq!(verification.code, "123456");
    }

    #[test]
    fn test_render() {
        let verification =
            VerificationCode::from_request(request(json!({"email": "a@b.com", "verificationCode": "123456"})))
                .unwrap();
        let email = verification.render(&TemplateEngine::new().unwrap()).unwrap();

        assert_eq!(email.subject, "123456 - Kode Verifikasi Retail App");
        assert!(email.html.contains("<div class=\"code\">123456</div>"));
        assert!(email.html.contains("15 menit"));
        assert!(email.html.contains("Halo, Pelanggan!"));
    }
}
