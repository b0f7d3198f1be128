use crate::error::{OutreachError, Result};
use crate::target::Target;
use crate::template::{self, interpolate, Templates};
use crate::types::ActionCode;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Everything but RFC 3986 unreserved characters is escaped, so spaces become
/// `%20` rather than `+`.
const MAILTO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap())
}

/// True for something that looks like a deliverable address. Patterns such as
/// `first.last@` or a bare domain are rejected.
pub fn is_sendable(address: &str) -> bool {
    email_re().is_match(address.trim())
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, MAILTO).to_string()
}

/// `mailto:` URI with the recipient, subject and body percent-encoded.
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode(to),
        encode(subject),
        encode(body)
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub target_id: String,
    pub action: ActionCode,
    pub to: Option<String>,
    pub subject: String,
    pub body: String,
    /// Withheld when the target has no sendable address.
    pub link: Option<String>,
}

impl Draft {
    /// The mailto link, or `InvalidEmail` when it was withheld.
    pub fn require_link(&self) -> Result<&str> {
        self.link
            .as_deref()
            .ok_or_else(|| OutreachError::InvalidEmail(self.target_id.clone()))
    }
}

/// Render the template for `action` against `target`.
pub fn compose(target: &Target, templates: &Templates, action: ActionCode) -> Result<Draft> {
    let tpl = template::get(templates, action)?;
    let subject = interpolate(&tpl.subject, target);
    let body = interpolate(&tpl.body, target);

    let to = target.email.as_deref().map(str::trim).map(str::to_string);
    let link = to
        .as_deref()
        .filter(|addr| is_sendable(addr))
        .map(|addr| mailto_link(addr, &subject, &body));

    Ok(Draft {
        target_id: target.id.clone(),
        action,
        to,
        subject,
        body,
        link,
    })
}
