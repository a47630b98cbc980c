use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Login form, sent as `application/x-www-form-urlencoded`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful `/token/login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body returned by the backend on 401
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Claims carried in the payload segment of an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User identifier
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Expiration timestamp, epoch seconds
    #[serde(rename = "exp", deserialize_with = "integral_seconds")]
    pub expires_at: i64,
}

/// Accepts `1700000000` as well as `1700000000.0`, rejects fractional seconds
fn integral_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Float(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Raw::Float(value) => Err(D::Error::custom(format!(
            "exp must be whole seconds, got {}",
            value
        ))),
    }
}

impl TokenClaims {
    pub fn is_expired_at(&self, now_epoch_seconds: i64) -> bool {
        self.expires_at <= now_epoch_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_use_wire_names() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"sub":"u1","name":"Budi","exp":1700000000,"iat":1}"#)
                .unwrap();
        assert_eq!(claims.subject, "u1");
        assert_eq!(claims.display_name, "Budi");
        assert_eq!(claims.expires_at, 1_700_000_000);
    }

    #[test]
    fn test_claims_reject_fractional_exp() {
        let parsed = serde_json::from_str::<TokenClaims>(r#"{"sub":"u1","name":"B","exp":1.5}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_claims_accept_whole_float_exp() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"sub":"u1","name":"B","exp":1893456000.0}"#).unwrap();
        assert_eq!(claims.expires_at, 1_893_456_000);
    }

    #[test]
    fn test_claims_reject_text_exp() {
        let parsed = serde_json::from_str::<TokenClaims>(r#"{"sub":"u1","name":"B","exp":"soon"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_error_detail_is_optional() {
        let body: ErrorDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }
}
