//! Access token decoding
//!
//! The token is never verified here (that is the backend's job); the payload is
//! only decoded so the UI knows who is logged in and when the token expires.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use contracts::system::auth::TokenClaims;
use thiserror::Error;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Raw token together with its decoded claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub raw: String,
    pub claims: TokenClaims,
}

/// Reason a token was rejected. Never leaves the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("expected 3 non-empty segments, got {0:?}")]
    Segments(Vec<usize>),
    #[error("payload is not base64: {0}")]
    Base64(String),
    #[error("payload is not valid claims json: {0}")]
    Json(String),
    #[error("claim `{0}` is empty")]
    EmptyClaim(&'static str),
}

/// Decode `header.payload.signature`, classifying every failure
pub fn try_decode_credential(raw: &str) -> Result<Credential, CredentialError> {
    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(CredentialError::Segments(
            segments.iter().map(|s| s.len()).collect(),
        ));
    }

    let payload = segments[1];
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|e| CredentialError::Base64(e.to_string()))?;

    let claims: TokenClaims =
        serde_json::from_slice(&bytes).map_err(|e| CredentialError::Json(e.to_string()))?;

    if claims.subject.is_empty() {
        return Err(CredentialError::EmptyClaim("sub"));
    }
    if claims.display_name.is_empty() {
        return Err(CredentialError::EmptyClaim("name"));
    }

    Ok(Credential {
        raw: raw.to_string(),
        claims,
    })
}

/// Decode a token; any failure means "no credential"
pub fn decode_credential(raw: &str) -> Option<Credential> {
    match try_decode_credential(raw) {
        Ok(credential) => Some(credential),
        Err(e) => {
            log::debug!("access token rejected: {}", e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Build an unsigned test token around `payload`
    pub(crate) fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.c2lnbmF0dXJl",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    pub(crate) fn valid_token() -> String {
        token_with_payload(r#"{"sub":"admin","name":"Administrator","exp":1893456000}"#)
    }

    #[test]
    fn test_decodes_valid_token() {
        let raw = valid_token();
        let credential = decode_credential(&raw).unwrap();
        assert_eq!(credential.raw, raw);
        assert_eq!(
            credential.claims,
            TokenClaims {
                subject: "admin".into(),
                display_name: "Administrator".into(),
                expires_at: 1_893_456_000,
            }
        );
    }

    #[test]
    fn test_accepts_whole_float_expiry() {
        let raw = token_with_payload(r#"{"sub":"admin","name":"A","exp":1893456000.0}"#);
        let credential = decode_credential(&raw).unwrap();
        assert_eq!(credential.claims.expires_at, 1_893_456_000);
    }

    #[test]
    fn test_accepts_padded_standard_alphabet() {
        let payload = STANDARD_LENIENT.encode(r#"{"sub":"u?>","name":"N","exp":1}"#);
        let raw = format!("aGVhZGVy.{}.c2ln", payload);
        assert!(decode_credential(&raw).is_some());
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert_eq!(decode_credential(""), None);
        assert_eq!(decode_credential("abc"), None);
        assert_eq!(decode_credential("a.b"), None);
        let four = format!("{}.extra", valid_token());
        assert_eq!(decode_credential(&four), None);
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!(matches!(
            try_decode_credential("a..c"),
            Err(CredentialError::Segments(_))
        ));
        let no_signature = valid_token().rsplit_once('.').unwrap().0.to_string() + ".";
        assert_eq!(decode_credential(&no_signature), None);
    }

    #[test]
    fn test_rejects_bad_payload() {
        assert!(matches!(
            try_decode_credential("a.!!!.c"),
            Err(CredentialError::Base64(_))
        ));
        let not_json = token_with_payload("not json");
        assert!(matches!(
            try_decode_credential(&not_json),
            Err(CredentialError::Json(_))
        ));
        let array = token_with_payload("[1,2,3]");
        assert_eq!(decode_credential(&array), None);
    }

    #[test]
    fn test_rejects_invalid_claims() {
        let cases = [
            r#"{"name":"N","exp":1}"#,
            r#"{"sub":"","name":"N","exp":1}"#,
            r#"{"sub":"s","name":"","exp":1}"#,
            r#"{"sub":"s","exp":1}"#,
            r#"{"sub":"s","name":"N"}"#,
            r#"{"sub":"s","name":"N","exp":1.5}"#,
            r#"{"sub":"s","name":"N","exp":"1"}"#,
            r#"{"sub":42,"name":"N","exp":1}"#,
        ];
        for payload in cases {
            assert_eq!(
                decode_credential(&token_with_payload(payload)),
                None,
                "payload {payload} should be rejected"
            );
        }
    }
}
