//! `User` record and the validated [`Email`] type.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder values used by [`User::synthetic`].
const SYNTHETIC_EMAIL: &str = "test@example.com";
const SYNTHETIC_CREATED_AT: &str = "2024-02-29T12:00:00Z";

// ── Email ─────────────────────────────────────────────────────────────────────

/// Characters allowed in the local part besides ASCII alphanumerics and `.`.
const LOCAL_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Why an address was rejected. Each variant carries the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("invalid email '{0}': contains a control character")]
    ControlCharacter(String),

    #[error("invalid email '{0}': contains whitespace")]
    Whitespace(String),

    #[error("invalid email '{0}': missing '@'")]
    MissingAt(String),

    #[error("invalid email '{0}': empty local part")]
    EmptyLocal(String),

    #[error("invalid email '{0}': more than one '@'")]
    MultipleAt(String),

    #[error("invalid email '{0}': malformed local part")]
    MalformedLocal(String),

    #[error("invalid email '{0}': malformed domain")]
    MalformedDomain(String),
}

/// A syntactically well-formed email address.
///
/// Checked on construction and on deserialization. The local part is
/// dot-separated runs of RFC 5322 `atext`. The domain has at least two
/// labels of `[A-Za-z0-9-]`, none starting or ending with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmailError> {
        let raw = raw.into();
        if raw.chars().any(char::is_control) {
            return Err(EmailError::ControlCharacter(raw));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace(raw));
        }
        let Some((local, domain)) = raw.split_once('@') else {
            return Err(EmailError::MissingAt(raw));
        };
        if local.is_empty() {
            return Err(EmailError::EmptyLocal(raw));
        }
        if domain.contains('@') {
            return Err(EmailError::MultipleAt(raw));
        }
        if !valid_local(local) {
            return Err(EmailError::MalformedLocal(raw));
        }
        if !valid_domain(domain) {
            return Err(EmailError::MalformedDomain(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Dot-atoms only: no leading, trailing or doubled dots.
fn valid_local(local: &str) -> bool {
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    })
}

fn valid_domain(domain: &str) -> bool {
    domain.contains('.')
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── User ──────────────────────────────────────────────────────────────────────

/// A platform user. Optional fields serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: Email,
    pub full_name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: String,
    pub is_active: bool,
    pub bio: Option<String>,
}

impl User {
    /// Build the placeholder user served by `GET /api/v1/users/{id}`.
    pub fn synthetic(user_id: i64) -> Self {
        Self {
            user_id,
            username: format!("user{user_id}"),
            email: Email(SYNTHETIC_EMAIL.to_string()),
            full_name: None,
            profile_picture_url: None,
            created_at: SYNTHETIC_CREATED_AT.to_string(),
            is_active: true,
            bio: None,
        }
    }
}
