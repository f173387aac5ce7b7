//! HTTP client for the remote API.
//!
//! The endpoints are split into two small traits so the session manager
//! and board operations stay generic and testable with fakes. `RemoteApi`
//! is the real implementation: browser-only `gloo-net` calls gated behind
//! the `csr` feature, with inert fallbacks that fail as network errors
//! outside the browser build.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Comment, Message};
#[cfg(feature = "csr")]
use super::types::{LoginRequest, NewPost, SignupRequest, TokenResponse};

/// Authentication endpoints. Neither call carries a token.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// `Authentication` on rejected credentials, `Network`/`Server`/
    /// `Decode` otherwise.
    async fn login(&self, email: &str, senha: &str) -> Result<String, ApiError>;

    /// Create an account. Does not establish a session.
    ///
    /// # Errors
    ///
    /// `Registration` on a rejected signup (e.g. duplicate email).
    async fn signup(&self, nome: &str, email: &str, senha: &str) -> Result<(), ApiError>;
}

/// Bearer-authenticated message board endpoints.
#[allow(async_fn_in_trait)]
pub trait BoardApi {
    /// `GET /messages` in server order.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on a stale token, `Network`/`Server`/`Decode`
    /// otherwise.
    async fn fetch_messages(&self, token: &str) -> Result<Vec<Message>, ApiError>;

    /// `POST /messages`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on a stale token, `Network`/`Server` otherwise.
    async fn post_message(&self, token: &str, text: &str) -> Result<(), ApiError>;

    /// `GET /messages/:id/comments` in server order.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on a stale token, `Network`/`Server`/`Decode`
    /// otherwise.
    async fn fetch_comments(&self, token: &str, message_id: &str)
    -> Result<Vec<Comment>, ApiError>;

    /// `POST /messages/:id/comments`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on a stale token, `Network`/`Server` otherwise.
    async fn post_comment(&self, token: &str, message_id: &str, text: &str)
    -> Result<(), ApiError>;
}

/// Value for the `Authorization` header on authenticated calls.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "csr")]
fn endpoint(path: &str) -> String {
    format!("{}{path}", super::API_BASE)
}

#[cfg(feature = "csr")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
fn decode_err(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(not(feature = "csr"))]
fn offline() -> ApiError {
    ApiError::Network("no browser environment".to_owned())
}

/// The real remote API reached over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteApi;

impl AuthApi for RemoteApi {
    async fn login(&self, email: &str, senha: &str) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = LoginRequest {
                email: email.to_owned(),
                senha: senha.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&endpoint("/login"))
                .json(&body)
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
            if !resp.ok() {
                return Err(ApiError::from_login_status(resp.status()));
            }
            let token: TokenResponse = resp.json().await.map_err(decode_err)?;
            Ok(token.token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, senha);
            Err(offline())
        }
    }

    async fn signup(&self, nome: &str, email: &str, senha: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = SignupRequest {
                nome: nome.to_owned(),
                email: email.to_owned(),
                senha: senha.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&endpoint("/signup"))
                .json(&body)
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ApiError::from_signup_status(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (nome, email, senha);
            Err(offline())
        }
    }
}

impl BoardApi for RemoteApi {
    async fn fetch_messages(&self, token: &str) -> Result<Vec<Message>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&endpoint("/messages"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(net_err)?;
            if !resp.ok() {
                return Err(ApiError::from_authed_status(resp.status()));
            }
            resp.json().await.map_err(decode_err)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(offline())
        }
    }

    async fn post_message(&self, token: &str, text: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = NewPost {
                text: text.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&endpoint("/messages"))
                .header("Authorization", &bearer(token))
                .json(&body)
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
            if !resp.ok() {
                return Err(ApiError::from_authed_status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, text);
            Err(offline())
        }
    }

    async fn fetch_comments(
        &self,
        token: &str,
        message_id: &str,
    ) -> Result<Vec<Comment>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&format!("/messages/{message_id}/comments"));
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(net_err)?;
            if !resp.ok() {
                return Err(ApiError::from_authed_status(resp.status()));
            }
            resp.json().await.map_err(decode_err)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, message_id);
            Err(offline())
        }
    }

    async fn post_comment(
        &self,
        token: &str,
        message_id: &str,
        text: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = NewPost {
                text: text.to_owned(),
            };
            let url = endpoint(&format!("/messages/{message_id}/comments"));
            let resp = gloo_net::http::Request::post(&url)
                .header("Authorization", &bearer(token))
                .json(&body)
                .map_err(net_err)?
                .send()
                .await
                .map_err(net_err)?;
            if !resp.ok() {
                return Err(ApiError::from_authed_status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, message_id, text);
            Err(offline())
        }
    }
}
