//! Mail draft links.
//!
//! The site never sends mail. It builds a `mailto:` link pre-filled with the
//! validated fields and hands it to the user's mail client.

use std::fmt;

use crate::config::DraftConfig;
use crate::error::SubmitError;
use crate::sanitize::neutralize_header_chars;
use crate::validate::{is_valid_email, ValidatedSubmission};

/// A composed `mailto:` link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLink {
    uri: String,
    subject: String,
    body: String,
}

impl DraftLink {
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Subject before encoding
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Body before encoding
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for DraftLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Parts of a decoded `mailto:` link
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedDraft {
    pub recipient: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// Builds draft links for one fixed recipient
#[derive(Debug, Clone)]
pub struct DraftComposer {
    config: DraftConfig,
}

impl DraftComposer {
    pub fn new(config: DraftConfig) -> Self {
        Self { config }
    }

    pub fn recipient(&self) -> &str {
        &self.config.recipient
    }

    /// Subject line for a project type
    pub fn subject(&self, project_type: &str) -> String {
        neutralize_header_chars(&format!("{}{}", self.config.subject_prefix, project_type))
    }

    /// Body lines, one per field, then the description
    pub fn body(&self, submission: &ValidatedSubmission) -> String {
        [
            format!("Navn: {}", submission.name),
            format!("Telefon: {}", submission.phone),
            format!("E-post: {}", submission.email),
            format!("Prosjekt: {}", submission.project_type),
            String::new(),
            "Beskrivelse:".to_string(),
            submission.description.clone(),
        ]
        .join("\n")
    }

    /// Compose the link. Every dynamic value is percent-encoded.
    pub fn compose(&self, submission: &ValidatedSubmission) -> Result<DraftLink, SubmitError> {
        let recipient = self.config.recipient.trim();
        if !is_valid_email(recipient) || recipient.contains(['?', '&', '#']) {
            return Err(SubmitError::ComposeFailure(format!(
                "invalid recipient address: {recipient:?}"
            )));
        }

        let subject = self.subject(&submission.project_type);
        let body = self.body(submission);
        let uri = format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        );

        Ok(DraftLink { uri, subject, body })
    }
}

/// Split a `mailto:` link into recipient, subject and body.
///
/// Returns `None` for anything that isn't a `mailto:` link with a recipient
/// or whose parameters don't percent-decode to UTF-8.
pub fn decode_draft(link: &str) -> Option<DecodedDraft> {
    let rest = link.strip_prefix("mailto:")?;
    let (addr, query) = rest.split_once('?').unwrap_or((rest, ""));
    let recipient = urlencoding::decode(addr).ok()?.trim().to_string();
    if recipient.is_empty() {
        return None;
    }

    let mut decoded = DecodedDraft {
        recipient,
        ..DecodedDraft::default()
    };
    for part in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        let value = urlencoding::decode(value).ok()?.into_owned();
        match key.to_ascii_lowercase().as_str() {
            "subject" => decoded.subject = Some(value),
            "body" => decoded.body = Some(value),
            _ => {}
        }
    }
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ValidatedSubmission {
        ValidatedSubmission {
            name: "Jo".into(),
            phone: "91234567".into(),
            email: "a@b.no".into(),
            project_type: "Rehab".into(),
            description: "kort men gyldig beskrivelse".into(),
        }
    }

    #[test]
    fn composes_mailto_with_encoded_parts() {
        let link = DraftComposer::new(DraftConfig::default())
            .compose(&submission())
            .unwrap();
        assert!(link
            .as_str()
            .starts_with("mailto:post@gjovik-byggservice.no?subject="));
        assert!(!link.as_str().contains('\n'));
        assert!(!link.as_str().contains(' '));
        assert_eq!(link.subject(), "Ny henvendelse – Rehab");
    }

    #[test]
    fn decodes_back_to_layout() {
        let link = DraftComposer::new(DraftConfig::default())
            .compose(&submission())
            .unwrap();
        let decoded = decode_draft(link.as_str()).unwrap();
        assert_eq!(decoded.recipient, "post@gjovik-byggservice.no");
        assert_eq!(decoded.subject.as_deref(), Some("Ny henvendelse – Rehab"));
        assert_eq!(
            decoded.body.as_deref(),
            Some(
                "Navn: Jo\nTelefon: 91234567\nE-post: a@b.no\nProsjekt: Rehab\n\nBeskrivelse:\nkort men gyldig beskrivelse"
            )
        );
    }

    #[test]
    fn field_values_cannot_add_parameters() {
        let mut s = submission();
        s.name = "x&cc=evil@example.com".into();
        s.project_type = "a?bcc=b".into();
        let link = DraftComposer::new(DraftConfig::default()).compose(&s).unwrap();

        let query = link.as_str().split_once('?').unwrap().1;
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(query.matches('?').count(), 0);
        let decoded = decode_draft(link.as_str()).unwrap();
        assert!(decoded.body.unwrap().contains("Navn: x&cc=evil@example.com"));
    }

    #[test]
    fn bad_recipient_is_a_compose_failure() {
        let config = DraftConfig {
            recipient: "not-an-address".into(),
            ..DraftConfig::default()
        };
        let err = DraftComposer::new(config).compose(&submission()).unwrap_err();
        assert!(matches!(err, SubmitError::ComposeFailure(_)));
    }

    #[test]
    fn decode_rejects_other_schemes() {
        assert_eq!(decode_draft("https://example.com"), None);
        assert_eq!(decode_draft("mailto:?subject=x"), None);
    }
}
