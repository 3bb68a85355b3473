//! Contact, auth and newsletter form payloads and their validation.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::AuthMode;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    #[error("field `email` must be a valid email address")]
    InvalidEmail,
    #[error("password confirmation does not match")]
    PasswordMismatch,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(self) -> Result<ContactSubmission, FormError> {
        let name = required("name", &self.name)?;
        let email = email_address(&self.email)?;
        let message = required("message", &self.message)?;
        let phone =
            self.phone.map(|phone| phone.trim().to_string()).filter(|phone| !phone.is_empty());

        Ok(ContactSubmission { name, email, phone, message })
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub mode: AuthMode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmPassword", alias = "confirm_password")]
    pub confirm_password: String,
}

impl std::fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthForm")
            .field("mode", &self.mode)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct AuthRequest {
    pub mode: AuthMode,
    pub name: Option<String>,
    pub email: String,
    pub password: SecretString,
}

impl AuthForm {
    pub fn validate(self) -> Result<AuthRequest, FormError> {
        let name = match self.mode {
            AuthMode::Signup => Some(required("name", &self.name)?),
            AuthMode::Login => None,
        };
        let email = email_address(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingField("password"));
        }
        if self.mode == AuthMode::Signup {
            if self.confirm_password.is_empty() {
                return Err(FormError::MissingField("confirmPassword"));
            }
            if self.confirm_password != self.password {
                return Err(FormError::PasswordMismatch);
            }
        }

        Ok(AuthRequest { mode: self.mode, name, email, password: SecretString::from(self.password) })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(self) -> Result<String, FormError> {
        email_address(&self.email)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Same shape check a browser applies to `type="email"` inputs: one `@`,
/// non-empty local part, a dotted domain and no whitespace.
fn email_address(value: &str) -> Result<String, FormError> {
    let email = required("email", value)?;
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::InvalidEmail);
    };
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace);
    if !well_formed {
        return Err(FormError::InvalidEmail);
    }
    Ok(email)
}
