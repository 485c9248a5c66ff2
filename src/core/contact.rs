use super::notice::Notice;
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/mgvzglyg";

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_BAD_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SENT: &str = "Message sent successfully! I'll get back to you soon.";
pub const MSG_REJECTED: &str = "Failed to send. Please try again later.";
pub const MSG_NETWORK: &str = "Network error. Please try again.";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"))
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingField(&'static str),
    #[error("{}", MSG_BAD_EMAIL)]
    InvalidEmail,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("endpoint rejected submission with status {0}")]
    Rejected(u16),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// The form's `action`, or the fallback relay when none is configured.
pub fn resolve_endpoint(action: Option<&str>) -> &str {
    match action.map(str::trim) {
        Some(a) if !a.is_empty() => a,
        _ => DEFAULT_ENDPOINT,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub body: String,
}

/// What a submit click turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// Validation failed; show the notice and do not touch the network.
    Reject(Notice),
    Send(SubmitRequest),
}

pub fn plan_submission(fields: &ContactFields, action: Option<&str>) -> SubmitPlan {
    match fields.validate() {
        Err(e) => SubmitPlan::Reject(Notice::error(e.to_string())),
        Ok(()) => SubmitPlan::Send(SubmitRequest {
            url: resolve_endpoint(action).to_string(),
            body: fields.encode(),
        }),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    pub reset_form: bool,
}

/// Maps the endpoint's answer (an HTTP status, or a transport failure).
pub fn finish_submission(result: Result<u16, SubmitError>) -> SubmitOutcome {
    match result.and_then(|status| {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SubmitError::Rejected(status))
        }
    }) {
        Ok(()) => SubmitOutcome {
            notice: Notice::success(MSG_SENT),
            reset_form: true,
        },
        Err(SubmitError::Rejected(_)) => SubmitOutcome {
            notice: Notice::error(MSG_REJECTED),
            reset_form: false,
        },
        Err(SubmitError::Network(_)) => SubmitOutcome {
            notice: Notice::error(MSG_NETWORK),
            reset_form: false,
        },
    }
}
