use async_trait::async_trait;
use lumilab_core::errors::ApplicationError;
use lumilab_core::forms::{AuthRequest, ContactSubmission};
use lumilab_core::submissions::{SubmissionKind, SubmissionReceipt, SubmissionSink};
use tracing::info;

/// Acknowledges submissions with a structured log event and a receipt.
/// Nothing is stored and no account is created. Message bodies and
/// passwords are never logged, and email addresses only in masked form.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSink;

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ApplicationError> {
        let receipt = SubmissionReceipt::issue(SubmissionKind::Contact);
        info!(
            event_name = "site.submission.contact",
            correlation_id = %receipt.id,
            email = %masked_email(&submission.email),
            has_phone = submission.phone.is_some(),
            message_chars = submission.message.chars().count(),
            "contact request received"
        );
        Ok(receipt)
    }

    async fn auth(&self, request: AuthRequest) -> Result<SubmissionReceipt, ApplicationError> {
        let receipt = SubmissionReceipt::issue(request.mode.into());
        info!(
            event_name = "site.submission.auth",
            correlation_id = %receipt.id,
            auth_mode = receipt.kind.as_str(),
            email = %masked_email(&request.email),
            "auth request received"
        );
        Ok(receipt)
    }

    async fn newsletter(&self, email: String) -> Result<SubmissionReceipt, ApplicationError> {
        let receipt = SubmissionReceipt::issue(SubmissionKind::Newsletter);
        info!(
            event_name = "site.submission.newsletter",
            correlation_id = %receipt.id,
            email = %masked_email(&email),
            "newsletter signup received"
        );
        Ok(receipt)
    }
}

/// Keeps the first character of the local part and the domain:
/// `mai@example.com` becomes `m***@example.com`.
fn masked_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use lumilab_core::forms::AuthForm;
    use lumilab_core::submissions::{SubmissionKind, SubmissionSink};
    use lumilab_core::view::AuthMode;

    use super::{masked_email, LoggingSink};

    #[test]
    fn logged_emails_hide_the_local_part() {
        assert_eq!(masked_email("mai.tran@example.com"), "m***@example.com");
        assert_eq!(masked_email("@example.com"), "***@example.com");
        assert_eq!(masked_email("not-an-address"), "***");
        assert!(!masked_email("mai.tran@example.com").contains("mai.tran"));
    }

    #[tokio::test]
    async fn signup_receipt_carries_signup_kind() {
        let request = AuthForm {
            mode: AuthMode::Signup,
            name: "Mai".to_string(),
            email: "mai@example.com".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
        }
        .validate()
        .expect("valid signup");

        let receipt = LoggingSink.auth(request).await.expect("sink accepts");
        assert_eq!(receipt.kind, SubmissionKind::Signup);
    }
}
