//! Login, logout and the current user.

use lf_core::UserInfo;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{LabfolderClient, error::ClientError, http::check_response};

#[derive(Deserialize)]
struct MeResponse {
    user: MeUser,
    #[serde(default)]
    user_settings: Option<MeSettings>,
}

#[derive(Deserialize)]
struct MeUser {
    #[serde(deserialize_with = "lf_core::de::id")]
    id: String,
    #[serde(default, deserialize_with = "lf_core::de::null_default")]
    first_name: String,
    #[serde(default, deserialize_with = "lf_core::de::null_default")]
    last_name: String,
    #[serde(default, deserialize_with = "lf_core::de::null_default")]
    email: String,
}

#[derive(Deserialize)]
struct MeSettings {
    #[serde(default, deserialize_with = "lf_core::de::null_default")]
    zone_id: String,
}

impl LabfolderClient {
    /// Exchange credentials for a bearer token, then fetch the user it
    /// belongs to.
    ///
    /// The token is kept even if the user lookup fails afterwards.
    ///
    /// # Errors
    ///
    /// [`ClientError::BadRequest`], [`ClientError::InvalidCredentials`] or
    /// [`ClientError::LoginBlocked`] for 400, 401 and 403. Other failures map
    /// to [`ClientError::Api`] or [`ClientError::Http`].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserInfo, ClientError> {
        tracing::debug!(email, "POST auth/login");
        let resp = self
            .http
            .post(self.url("auth/login"))
            .timeout(self.auth_timeout)
            .json(&json!({ "user": email, "password": password }))
            .send()
            .await?;

        let token = match resp.status() {
            StatusCode::OK => {
                let body: Value = resp.json().await?;
                body.get("token")
                    .and_then(Value::as_str)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ClientError::UnexpectedResponse("login answered without a token".into())
                    })?
            }
            StatusCode::BAD_REQUEST => {
                return Err(ClientError::BadRequest(resp.text().await.unwrap_or_default()));
            }
            StatusCode::UNAUTHORIZED => return Err(ClientError::InvalidCredentials),
            StatusCode::FORBIDDEN => return Err(ClientError::LoginBlocked),
            _ => {
                check_response(resp).await?;
                return Err(ClientError::UnexpectedResponse(
                    "login answered without a token".into(),
                ));
            }
        };
        self.token = Some(token);

        let user = self.current_user().await?;
        tracing::info!(user = %user.email, "logged in to Labfolder");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// `GET me?expand=user`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] without a token, or a
    /// transport/API error.
    pub async fn current_user(&self) -> Result<UserInfo, ClientError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .get(self.url("me?expand=user"))
            .bearer_auth(token)
            .timeout(self.auth_timeout)
            .send()
            .await?;
        let me: MeResponse = check_response(resp).await?.json().await?;
        let location = me.user_settings.map(|s| s.zone_id).unwrap_or_default();
        Ok(UserInfo::new(
            me.user.id,
            me.user.first_name,
            me.user.last_name,
            me.user.email,
            location,
        ))
    }

    /// Invalidate the token on the server and forget it locally.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] unless the server answers 204. The local
    /// token is kept in that case.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .post(self.url("auth/logout"))
            .bearer_auth(token)
            .timeout(self.auth_timeout)
            .send()
            .await?;
        if resp.status() != StatusCode::NO_CONTENT {
            return Err(ClientError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        self.token = None;
        self.user = None;
        tracing::info!("logged out of Labfolder");
        Ok(())
    }

    /// The author id for new entries: the cached login user, else a lookup.
    pub(crate) async fn current_user_id(&self) -> Result<String, ClientError> {
        if let Some(user) = &self.user {
            return Ok(user.id.clone());
        }
        Ok(self.current_user().await?.id)
    }
}
