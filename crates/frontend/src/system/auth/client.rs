use contracts::shared::list_query::ListQuery;
use contracts::system::auth::{ErrorDetail, LoginRequest, LoginResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::session::SessionStore;
use crate::shared::http::{ApiError, HttpRequest, HttpResponse, Method, Transport};

const LOGIN_PATH: &str = "/token/login";
const INVALID_LOGIN_RESPONSE: &str = "Invalid login response";

/// Backend client bound to the session
///
/// Every call takes its authorization snapshot when it starts; a logout while
/// a request is in flight only affects later calls.
#[derive(Clone)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, session: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange username/password for an access token and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let form = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = serde_qs::to_string(&form).map_err(|e| ApiError::Encode(e.to_string()))?;

        let request = HttpRequest::new(Method::Post, self.url(LOGIN_PATH))
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);

        log::debug!("login as {}", username);
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            return Err(ApiError::Authentication {
                status: response.status,
                message: error_detail(&response),
                status_text: response.status_text,
            });
        }

        if !response.is_success() {
            return Err(ApiError::Authentication {
                status: response.status,
                status_text: response.status_text,
                message: INVALID_LOGIN_RESPONSE.to_string(),
            });
        }

        let token = serde_json::from_str::<LoginResponse>(&response.body)
            .ok()
            .map(|body| body.access_token)
            .filter(|t| !t.is_empty());

        let Some(token) = token else {
            return Err(ApiError::Authentication {
                status: response.status,
                status_text: response.status_text,
                message: INVALID_LOGIN_RESPONSE.to_string(),
            });
        };

        self.session.set_credential(Some(&token));
        log::info!(
            "login finished, authenticated: {}",
            self.session.is_authenticated()
        );
        Ok(())
    }

    /// Drop the session locally; the backend is not contacted
    pub fn logout(&self) {
        self.session.logout();
    }

    /// GET `path` with optional list query
    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ListQuery>,
    ) -> Result<R, ApiError> {
        let mut url = self.url(path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
            url.push('?');
            url.push_str(&qs);
        }

        let request = self.authorize(HttpRequest::new(Method::Get, url));
        log::debug!("fetch {}...", request.url);
        let response = self.transport.send(request).await?;
        self.process_json(response)
    }

    /// POST `body` as JSON to `path`
    pub async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = self.authorize(
            HttpRequest::new(Method::Post, self.url(path))
                .header("Content-Type", "application/json")
                .body(json),
        );
        log::debug!("post {}...", request.url);
        let response = self.transport.send(request).await?;
        self.process_json(response)
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        let request = request.header("Accept", "application/json");
        match self.session.snapshot().authorization_header() {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }

    fn process_json<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        if response.status == 401 {
            // token rejected: need to login again
            self.session.logout();
            let detail = error_detail(&response);
            log::warn!("unauthorized: {}", detail);
            return Err(ApiError::Unauthorized { detail });
        }

        if !response.is_json() {
            return Err(ApiError::ResponseFormat);
        }

        if !response.is_success() {
            log::warn!(
                "unexpected response {} {}: {}",
                response.status,
                response.status_text,
                response.body
            );
            return Err(ApiError::UnexpectedStatus {
                status: response.status,
                status_text: response.status_text,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// `detail` field of an error body, or the status text
fn error_detail(response: &HttpResponse) -> String {
    serde_json::from_str::<ErrorDetail>(&response.body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| response.status_text.clone())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::system::auth::credential::tests::valid_token;
    use crate::system::auth::session::tests::MemorySession;
    use crate::system::auth::session::SessionState;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses and records what was sent
    #[derive(Default)]
    pub(crate) struct ScriptedTransport {
        pub sent: RefCell<Vec<HttpRequest>>,
        pub responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, content_type: Option<&str>, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                status_text: status_text(status).to_string(),
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Transport(message.to_string())));
            self
        }

        pub fn last(&self) -> HttpRequest {
            self.sent.borrow().last().cloned().expect("no request sent")
        }
    }

    fn status_text(status: u16) -> &'static str {
        match status {
            200 => "OK",
            401 => "Unauthorized",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "",
        }
    }

    #[async_trait(?Send)]
    impl Transport for &ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    impl SessionStore for &MemorySession {
        fn snapshot(&self) -> SessionState {
            <MemorySession as SessionStore>::snapshot(self)
        }

        fn replace(&self, next: SessionState) {
            <MemorySession as SessionStore>::replace(self, next)
        }
    }

    const JSON: Option<&str> = Some("application/json");

    fn client<'a>(
        transport: &'a ScriptedTransport,
        session: &'a MemorySession,
    ) -> ApiClient<&'a ScriptedTransport, &'a MemorySession> {
        ApiClient::new("http://localhost:8000/", transport, session)
    }

    #[test]
    fn test_login_success_opens_session() {
        let body = format!(r#"{{"access_token":"{}","token_type":"bearer"}}"#, valid_token());
        let transport = ScriptedTransport::default().reply(200, JSON, &body);
        let session = MemorySession::default();

        block_on(client(&transport, &session).login("admin", "s3cret&x")).unwrap();

        assert!(session.is_authenticated());
        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://localhost:8000/token/login");
        assert_eq!(
            sent.header_value("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(sent.header_value("Authorization"), None);
        assert_eq!(sent.body.as_deref(), Some("username=admin&password=s3cret%26x"));
    }

    #[test]
    fn test_login_rejected_uses_detail() {
        let transport = ScriptedTransport::default().reply(
            401,
            JSON,
            r#"{"detail":"Incorrect username or password"}"#,
        );
        let session = MemorySession::default();

        let err = block_on(client(&transport, &session).login("admin", "bad")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Authentication {
                status: 401,
                status_text: "Unauthorized".into(),
                message: "Incorrect username or password".into(),
            }
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_other_status() {
        let transport = ScriptedTransport::default().reply(500, Some("text/plain"), "boom");
        let session = MemorySession::default();

        let err = block_on(client(&transport, &session).login("a", "b")).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Authentication { status: 500, ref message, .. } if message == "Invalid login response"
        ));
    }

    #[test]
    fn test_login_without_token() {
        for body in [r#"{"token_type":"bearer"}"#, r#"{"access_token":5}"#, r#"{"access_token":""}"#, "nope"] {
            let transport = ScriptedTransport::default().reply(200, JSON, body);
            let session = MemorySession::default();
            let err = block_on(client(&transport, &session).login("a", "b")).unwrap_err();
            assert!(
                matches!(err, ApiError::Authentication { status: 200, .. }),
                "body {body}"
            );
        }
    }

    #[test]
    fn test_login_with_undecodable_token_stays_unauthenticated() {
        let transport = ScriptedTransport::default().reply(
            200,
            JSON,
            r#"{"access_token":"not-a-jwt","token_type":"bearer"}"#,
        );
        let session = MemorySession::default();
        block_on(client(&transport, &session).login("a", "b")).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_transport_failure() {
        let transport = ScriptedTransport::default().fail("offline");
        let session = MemorySession::default();
        let err = block_on(client(&transport, &session).login("a", "b")).unwrap_err();
        assert_eq!(err, ApiError::Transport("offline".into()));
    }

    #[test]
    fn test_get_without_session_sends_no_authorization() {
        let transport = ScriptedTransport::default().reply(200, JSON, "[]");
        let session = MemorySession::default();

        let rows: Vec<serde_json::Value> =
            block_on(client(&transport, &session).get_json("/item/list", None)).unwrap();
        assert!(rows.is_empty());

        let sent = transport.last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://localhost:8000/item/list");
        assert_eq!(sent.header_value("Authorization"), None);
        assert_eq!(sent.header_value("Accept"), Some("application/json"));
    }

    #[test]
    fn test_get_with_session_sends_bearer_and_query() {
        let transport = ScriptedTransport::default().reply(200, JSON, r#"[{"id":1}]"#);
        let session = MemorySession::default();
        let token = valid_token();
        session.set_credential(Some(&token));

        let query = ListQuery::search("box", 20).with_offset(40);
        let rows: Vec<serde_json::Value> =
            block_on(client(&transport, &session).get_json("/market-place/list", Some(&query)))
                .unwrap();
        assert_eq!(rows.len(), 1);

        let sent = transport.last();
        assert_eq!(
            sent.url,
            "http://localhost:8000/market-place/list?q=box&limit=20&offset=40"
        );
        assert_eq!(
            sent.header_value("Authorization"),
            Some(format!("Bearer {}", token).as_str())
        );
    }

    #[test]
    fn test_unauthorized_logs_out() {
        let transport = ScriptedTransport::default().reply(
            401,
            JSON,
            r#"{"detail":"Could not validate credentials"}"#,
        );
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));

        let err = block_on(
            client(&transport, &session).get_json::<serde_json::Value>("/item/list", None),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: "Could not validate credentials".into()
            }
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unauthorized_without_json_body_still_logs_out() {
        let transport = ScriptedTransport::default().reply(401, Some("text/html"), "<html>");
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));

        let err = block_on(
            client(&transport, &session).get_json::<serde_json::Value>("/item/list", None),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: "Unauthorized".into()
            }
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_non_json_response() {
        let transport = ScriptedTransport::default().reply(200, Some("text/html"), "<html>");
        let session = MemorySession::default();
        let err = block_on(
            client(&transport, &session).get_json::<serde_json::Value>("/item/list", None),
        )
        .unwrap_err();
        assert_eq!(err, ApiError::ResponseFormat);
    }

    #[test]
    fn test_unexpected_status_keeps_session() {
        let transport =
            ScriptedTransport::default().reply(500, JSON, r#"{"detail":"db down"}"#);
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));

        let err = block_on(
            client(&transport, &session).get_json::<serde_json::Value>("/item/list", None),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::UnexpectedStatus {
                status: 500,
                status_text: "Internal Server Error".into()
            }
        );
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_post_unauthorized_logs_out() {
        let transport = ScriptedTransport::default().reply(
            401,
            JSON,
            r#"{"detail":"Signature has expired"}"#,
        );
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));
        let body = serde_json::json!({"name": "Shopee"});

        let err = block_on(
            client(&transport, &session)
                .post_json::<_, serde_json::Value>("/market-place/save", &body),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: "Signature has expired".into()
            }
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_post_non_json_response() {
        let transport = ScriptedTransport::default().reply(200, Some("text/plain"), "ok");
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));
        let body = serde_json::json!({"name": "Shopee"});

        let err = block_on(
            client(&transport, &session)
                .post_json::<_, serde_json::Value>("/market-place/save", &body),
        )
        .unwrap_err();
        assert_eq!(err, ApiError::ResponseFormat);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_post_sends_json_body() {
        let transport = ScriptedTransport::default().reply(
            200,
            JSON,
            r#"{"success":true,"error":null,"data":{"id":9}}"#,
        );
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));

        let body = serde_json::json!({"name": "Shopee", "isActive": true});
        let resp: serde_json::Value =
            block_on(client(&transport, &session).post_json("/market-place/save", &body)).unwrap();
        assert_eq!(resp["data"]["id"], 9);

        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.header_value("Content-Type"), Some("application/json"));
        assert!(sent.header_value("Authorization").is_some());
        let sent_body: serde_json::Value =
            serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent_body, body);
    }

    #[test]
    fn test_malformed_json_body() {
        let transport = ScriptedTransport::default().reply(200, JSON, "{oops");
        let session = MemorySession::default();
        let err = block_on(
            client(&transport, &session).get_json::<serde_json::Value>("/item/list", None),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_logout_after_call_affects_only_later_calls() {
        let transport = ScriptedTransport::default()
            .reply(200, JSON, "[]")
            .reply(200, JSON, "[]");
        let session = MemorySession::default();
        session.set_credential(Some(&valid_token()));
        let api = client(&transport, &session);

        let _: Vec<serde_json::Value> = block_on(api.get_json("/item/list", None)).unwrap();
        api.logout();
        let _: Vec<serde_json::Value> = block_on(api.get_json("/item/list", None)).unwrap();

        let sent = transport.sent.borrow();
        assert!(sent[0].header_value("Authorization").is_some());
        assert!(sent[1].header_value("Authorization").is_none());
    }
}
