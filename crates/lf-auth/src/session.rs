use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What is persisted after a successful login. The password never is.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    /// Server the token was issued by. Empty when the token came from the
    /// environment without a URL.
    #[serde(default)]
    pub server_url: String,
    pub token: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl StoredSession {
    #[must_use]
    pub fn new(server_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: token.into(),
            user_id: None,
            email: None,
            logged_in_at: Some(Utc::now()),
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>, email: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self.email = Some(email.into());
        self
    }

    /// Whether this session may be used against `server_url`. A session
    /// without a recorded server matches any.
    #[must_use]
    pub fn matches_server(&self, server_url: &str) -> bool {
        self.server_url.is_empty()
            || self.server_url.trim_end_matches('/') == server_url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("server_url", &self.server_url)
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("logged_in_at", &self.logged_in_at)
            .finish()
    }
}
