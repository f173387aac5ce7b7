//! Board operations: authenticated list fetches and composer
//! submissions.
//!
//! Lists are replaced wholesale by each fetch and ordering is whatever
//! the server returned. After a successful submission the caller
//! re-fetches; there is no optimistic insert.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::api::BoardApi;
use crate::net::error::ApiError;
use crate::net::types::{Comment, Message};
use crate::state::session::SessionState;
use crate::util::text::non_blank;

fn token(session: &SessionState) -> &str {
    session.token.as_deref().unwrap_or_default()
}

/// Fetch the full message list with the session's bearer token.
///
/// # Errors
///
/// `Unauthorized` on a stale token, `Network`/`Server`/`Decode` when the
/// call fails.
pub async fn messages(
    api: &impl BoardApi,
    session: &SessionState,
) -> Result<Vec<Message>, ApiError> {
    api.fetch_messages(token(session)).await
}

/// Fetch the comments under one message.
///
/// # Errors
///
/// Same as [`messages`].
pub async fn comments(
    api: &impl BoardApi,
    session: &SessionState,
    message_id: &str,
) -> Result<Vec<Comment>, ApiError> {
    api.fetch_comments(token(session), message_id).await
}

/// Submit a new message.
///
/// Blank input is dropped client-side: `Ok(false)` means no request was
/// issued. `Ok(true)` means the server accepted the post and the caller
/// should re-fetch the list.
///
/// # Errors
///
/// Same as [`messages`].
pub async fn submit_message(
    api: &impl BoardApi,
    session: &SessionState,
    text: &str,
) -> Result<bool, ApiError> {
    let Some(text) = non_blank(text) else {
        return Ok(false);
    };
    api.post_message(token(session), text).await?;
    Ok(true)
}

/// Submit a new comment under `message_id`. Same contract as
/// [`submit_message`].
///
/// # Errors
///
/// Same as [`messages`].
pub async fn submit_comment(
    api: &impl BoardApi,
    session: &SessionState,
    message_id: &str,
    text: &str,
) -> Result<bool, ApiError> {
    let Some(text) = non_blank(text) else {
        return Ok(false);
    };
    api.post_comment(token(session), message_id, text).await?;
    Ok(true)
}
