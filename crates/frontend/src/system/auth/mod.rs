//! Session token manager: token decoding, the session state machine and the
//! authenticated API client.

pub mod client;
pub mod context;
pub mod credential;
pub mod guard;
pub mod session;
pub mod storage;

pub use client::ApiClient;
pub use context::{use_auth, AppClient, AuthContext, AuthProvider};
pub use session::{SessionState, SessionStore};
