//! Port for handing validated form submissions to whatever receives them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{ApplicationError, DomainError};
use crate::forms::{AuthForm, AuthRequest, ContactForm, ContactSubmission, NewsletterForm};
use crate::view::AuthMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Contact,
    Login,
    Signup,
    Newsletter,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Newsletter => "newsletter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: String,
    pub kind: SubmissionKind,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn issue(kind: SubmissionKind) -> Self {
        Self { id: Uuid::new_v4().simple().to_string(), kind, received_at: Utc::now() }
    }
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ApplicationError>;

    async fn auth(&self, request: AuthRequest) -> Result<SubmissionReceipt, ApplicationError>;

    async fn newsletter(&self, email: String) -> Result<SubmissionReceipt, ApplicationError>;
}

impl From<AuthMode> for SubmissionKind {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Self::Login,
            AuthMode::Signup => Self::Signup,
        }
    }
}

/// Validates a contact form and hands it to `sink`. Invalid input never
/// reaches the sink.
pub async fn submit_contact(
    sink: &dyn SubmissionSink,
    form: ContactForm,
) -> Result<SubmissionReceipt, ApplicationError> {
    let submission = form.validate().map_err(DomainError::from)?;
    sink.contact(submission).await
}

pub async fn submit_auth(
    sink: &dyn SubmissionSink,
    form: AuthForm,
) -> Result<SubmissionReceipt, ApplicationError> {
    let request = form.validate().map_err(DomainError::from)?;
    sink.auth(request).await
}

pub async fn submit_newsletter(
    sink: &dyn SubmissionSink,
    form: NewsletterForm,
) -> Result<SubmissionReceipt, ApplicationError> {
    let email = form.validate().map_err(DomainError::from)?;
    sink.newsletter(email).await
}
