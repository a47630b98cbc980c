use contracts::system::auth::TokenClaims;

use super::credential::{decode_credential, Credential};

/// Process-wide authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Credential),
}

impl SessionState {
    /// State for an optional raw token; anything that does not decode is unauthenticated
    pub fn from_raw_token(raw_token: Option<&str>) -> Self {
        match raw_token.and_then(decode_credential) {
            Some(credential) => Self::Authenticated(credential),
            None => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn claims(&self) -> Option<&TokenClaims> {
        match self {
            Self::Authenticated(credential) => Some(&credential.claims),
            Self::Unauthenticated => None,
        }
    }

    pub fn raw_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(credential) => Some(&credential.raw),
            Self::Unauthenticated => None,
        }
    }

    /// `Authorization` header value for outgoing calls
    pub fn authorization_header(&self) -> Option<String> {
        self.raw_token().map(|raw| format!("Bearer {}", raw))
    }
}

/// Owner of the single [`SessionState`]
///
/// Implementors only provide storage; every transition goes through
/// [`SessionStore::set_credential`].
pub trait SessionStore {
    /// Current state, read without subscribing
    fn snapshot(&self) -> SessionState;

    /// Replace the stored state. Call [`SessionStore::set_credential`] instead.
    fn replace(&self, next: SessionState);

    /// Hook for side effects of a transition (persistence)
    fn on_transition(&self, _next: &SessionState) {}

    fn set_credential(&self, raw_token: Option<&str>) {
        let next = SessionState::from_raw_token(raw_token);
        match next.claims() {
            Some(claims) => {
                let expires = chrono::DateTime::from_timestamp(claims.expires_at, 0)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| claims.expires_at.to_string());
                log::debug!("session for {} expires at {}", claims.subject, expires);
            }
            None if raw_token.is_some() => log::warn!("rejected access token, session cleared"),
            None => {}
        }
        self.on_transition(&next);
        self.replace(next);
    }

    fn logout(&self) {
        self.set_credential(None);
    }

    fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }
}
