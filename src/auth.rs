//! Auth session manager: login, registration, logout, and startup
//! restore.
//!
//! Every operation returns the next `SessionState` as a plain value and
//! leaves navigation to the caller, so the transitions are testable
//! without a browser. The token store and the API are injected by
//! reference for the same reason.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::storage::TokenStore;

/// One-shot startup restore.
///
/// A persisted token re-enters the authenticated state with an unknown
/// identity; nothing is verified with the server. No token means
/// anonymous.
pub fn restore(store: &impl TokenStore) -> SessionState {
    match store.get() {
        Some(token) => SessionState::restored(token),
        None => SessionState::default(),
    }
}

/// Exchange credentials for a session.
///
/// On success the token is persisted and the returned state carries the
/// signed-in identity. On failure nothing is persisted and the caller's
/// current state stays as it was.
///
/// # Errors
///
/// `Authentication` on rejected credentials; `Network`/`Server`/`Decode`
/// when the call itself fails.
pub async fn login(
    api: &impl AuthApi,
    store: &impl TokenStore,
    email: &str,
    senha: &str,
) -> Result<SessionState, ApiError> {
    let token = api.login(email, senha).await?;
    store.set(&token);
    Ok(SessionState::authenticated(token, email))
}

/// Create an account, then sign in with the same credentials.
///
/// Registration itself never establishes a session; the session comes
/// from the delegated login.
///
/// # Errors
///
/// `Registration` on a rejected signup (login is not attempted), or any
/// error the delegated login produces.
pub async fn register(
    api: &impl AuthApi,
    store: &impl TokenStore,
    nome: &str,
    email: &str,
    senha: &str,
) -> Result<SessionState, ApiError> {
    api.signup(nome, email, senha).await?;
    login(api, store, email, senha).await
}

/// Drop the session: clear the persisted token and return the anonymous
/// state.
///
/// Best-effort local operation; no server-side call, always succeeds,
/// idempotent.
pub fn logout(store: &impl TokenStore) -> SessionState {
    store.clear();
    SessionState::default()
}
