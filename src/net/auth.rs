//! Client for the demo authentication service (`POST /login`, `POST /register`).
//!
//! ERROR HANDLING
//! ==============
//! Status codes map onto [`ClientError`] in a fixed order: 400, then 401,
//! then any structured `{ error }` body, then a generic connectivity message.
//! A 2xx response without a non-empty token is a protocol error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::{AUTH_CONNECTIVITY_MESSAGE, ClientError, NO_TOKEN_MESSAGE};
use super::http::{HttpClient, HttpRequest, HttpResponse};
use super::types::{AuthErrorBody, Credentials, TokenResponse};
use crate::config::AuthConfig;

/// Which credential exchange to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

/// Exchanges credentials for a bearer token.
pub struct AuthApi<C> {
    client: C,
    base_url: String,
    api_key: String,
}

impl<C: HttpClient> AuthApi<C> {
    pub fn new(client: C, config: &AuthConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// Send `credentials` to the endpoint for `action` and return the issued token.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] classified from the response or transport
    /// failure.
    pub async fn exchange(&self, action: AuthAction, credentials: &Credentials) -> Result<String, ClientError> {
        let request = self.request(action, credentials)?;
        log::debug!("auth request {} for {}", action.path(), credentials.email);

        let resp = self.client.send(request).await.map_err(|e| {
            log::error!("auth request {} failed: {e}", action.path());
            ClientError::from_auth_transport(&e)
        })?;

        let result = classify_auth_response(&resp);
        if let Err(e) = &result {
            log::warn!("auth request {} rejected (status {}): {e}", action.path(), resp.status);
        }
        result
    }

    fn request(&self, action: AuthAction, credentials: &Credentials) -> Result<HttpRequest, ClientError> {
        let url = format!("{}{}", self.base_url, action.path());
        let request = HttpRequest::post_json(url, credentials).map_err(|e| ClientError::from_auth_transport(&e))?;
        Ok(request.header("x-api-key", &self.api_key))
    }
}

/// Map an auth-service response to the issued token or a [`ClientError`].
///
/// # Errors
///
/// See the module docs for the status-to-error order.
pub fn classify_auth_response(resp: &HttpResponse) -> Result<String, ClientError> {
    if resp.is_success() {
        return resp
            .json::<TokenResponse>()
            .and_then(|body| body.token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::Protocol(NO_TOKEN_MESSAGE.to_owned()));
    }

    match resp.status {
        400 => Err(ClientError::Validation),
        401 => Err(ClientError::InvalidCredentials),
        _ => match resp.json::<AuthErrorBody>() {
            Some(body) if !body.error.is_empty() => Err(ClientError::Remote(body.error)),
            _ => Err(ClientError::Connectivity(AUTH_CONNECTIVITY_MESSAGE.to_owned())),
        },
    }
}
