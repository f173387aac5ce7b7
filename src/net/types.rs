#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`. Field names follow the remote API's wire
/// format exactly.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Successful login response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// A board message. The server owns ids and list ordering; the client
/// only holds a read-through copy rebuilt on every fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
}

/// A comment under one message. The association is carried by the
/// endpoint path, not the payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

/// Body of message and comment compose calls.
#[derive(Clone, Debug, Serialize)]
pub struct NewPost {
    pub text: String,
}
