#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Identity of the signed-in user as known to the client.
///
/// Populated only by a live login. A session restored from the persisted
/// token has no identity until the user signs in again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// The client's belief about the current user: a bearer token and the
/// identity behind it.
///
/// The session counts as authenticated exactly when a token is held. The
/// token is never validated client-side, so a stale or revoked token
/// looks authenticated until the server rejects an authenticated call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub identity: Option<Identity>,
}

impl SessionState {
    /// Session established by a live login.
    pub fn authenticated(token: String, email: &str) -> Self {
        Self {
            token: Some(token),
            identity: Some(Identity {
                email: email.to_owned(),
            }),
        }
    }

    /// Session restored from the persisted token at startup.
    ///
    /// The identity is unknown: the token is trusted as-is and nothing is
    /// re-fetched from the server.
    pub fn restored(token: String) -> Self {
        Self {
            token: Some(token),
            identity: None,
        }
    }

    /// Whether protected views may render.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
