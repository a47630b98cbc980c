use leptos::prelude::*;

use super::client::ApiClient;
use super::credential::decode_credential;
use super::session::{SessionState, SessionStore};
use super::storage;
use crate::shared::config::use_config;
use crate::shared::http::GlooTransport;

/// Session state held in a signal, optionally mirrored to sessionStorage
#[derive(Clone, Copy)]
pub struct SignalSession {
    pub state: RwSignal<SessionState>,
    persist: bool,
}

impl SignalSession {
    pub fn new(persist: bool) -> Self {
        Self {
            state: RwSignal::new(SessionState::Unauthenticated),
            persist,
        }
    }
}

impl SessionStore for SignalSession {
    fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    fn replace(&self, next: SessionState) {
        self.state.set(next);
    }

    fn on_transition(&self, next: &SessionState) {
        if !self.persist {
            return;
        }
        match next.raw_token() {
            Some(raw) => storage::save_access_token(raw),
            None => storage::clear_tokens(),
        }
    }
}

/// Client used by every screen
pub type AppClient = ApiClient<GlooTransport, SignalSession>;

#[derive(Clone)]
pub struct AuthContext {
    pub session: SignalSession,
    pub client: AppClient,
}

impl AuthContext {
    /// Reactive read of the session
    pub fn state(&self) -> SessionState {
        self.session.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.state.with(|s| s.is_authenticated())
    }
}

/// A stored token is reused only if it still decodes and has not expired
pub fn revalidate_stored_token(stored: Option<&str>, now_epoch_seconds: i64) -> Option<&str> {
    let raw = stored?;
    let credential = decode_credential(raw)?;
    if credential.claims.is_expired_at(now_epoch_seconds) {
        log::info!("stored session of {} expired", credential.claims.subject);
        return None;
    }
    Some(raw)
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = use_config();
    let session = SignalSession::new(config.persist_session);

    if config.persist_session {
        let stored = storage::get_access_token();
        let now = chrono::Utc::now().timestamp();
        // goes through set_credential even when nothing survives, so storage is cleaned up
        session.set_credential(revalidate_stored_token(stored.as_deref(), now));
    }

    let client = ApiClient::new(config.api_base.clone(), GlooTransport, session);
    provide_context(AuthContext { session, client });

    children()
}

/// Hook to access auth state and the API client
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
