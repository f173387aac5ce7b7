use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

/// Fake board API accepting a single bearer token.
///
/// Posts are appended in arrival order so server-side ordering can be
/// asserted after a re-fetch.
struct FakeBoard {
    token: String,
    messages: RefCell<Vec<Message>>,
    comments: RefCell<Vec<(String, Comment)>>,
    seen_tokens: RefCell<Vec<String>>,
    posts: RefCell<u32>,
}

impl FakeBoard {
    fn accepting(token: &str) -> Self {
        Self {
            token: token.to_owned(),
            messages: RefCell::new(Vec::new()),
            comments: RefCell::new(Vec::new()),
            seen_tokens: RefCell::new(Vec::new()),
            posts: RefCell::new(0),
        }
    }

    fn check(&self, token: &str) -> Result<(), ApiError> {
        self.seen_tokens.borrow_mut().push(token.to_owned());
        if token == self.token {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

impl BoardApi for FakeBoard {
    async fn fetch_messages(&self, token: &str) -> Result<Vec<Message>, ApiError> {
        self.check(token)?;
        Ok(self.messages.borrow().clone())
    }

    async fn post_message(&self, token: &str, text: &str) -> Result<(), ApiError> {
        self.check(token)?;
        *self.posts.borrow_mut() += 1;
        let id = format!("m-{}", self.messages.borrow().len() + 1);
        self.messages.borrow_mut().push(Message {
            id,
            text: text.to_owned(),
        });
        Ok(())
    }

    async fn fetch_comments(
        &self,
        token: &str,
        message_id: &str,
    ) -> Result<Vec<Comment>, ApiError> {
        self.check(token)?;
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|(id, _)| id == message_id)
            .map(|(_, comment)| comment.clone())
            .collect())
    }

    async fn post_comment(&self, token: &str, message_id: &str, text: &str) -> Result<(), ApiError> {
        self.check(token)?;
        *self.posts.borrow_mut() += 1;
        self.comments.borrow_mut().push((
            message_id.to_owned(),
            Comment {
                text: text.to_owned(),
            },
        ));
        Ok(())
    }
}

fn session_with(token: &str) -> SessionState {
    SessionState::authenticated(token.to_owned(), "a@x.com")
}

// =============================================================
// Bearer token propagation
// =============================================================

#[test]
fn fetch_attaches_the_session_token() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("T1");

    block_on(messages(&api, &session)).expect("fetch");

    assert_eq!(*api.seen_tokens.borrow(), vec!["T1".to_owned()]);
}

#[test]
fn stale_token_is_reported_as_unauthorized() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("revoked");

    let err = block_on(messages(&api, &session)).expect_err("rejected");

    assert_eq!(err, ApiError::Unauthorized);
}

// =============================================================
// Message composer
// =============================================================

#[test]
fn blank_submit_issues_no_post() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("T1");

    let sent = block_on(submit_message(&api, &session, "   ")).expect("no-op");

    assert!(!sent);
    assert_eq!(*api.posts.borrow(), 0);
}

#[test]
fn submit_trims_the_text() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("T1");

    let sent = block_on(submit_message(&api, &session, "  hi  ")).expect("post");

    assert!(sent);
    assert_eq!(api.messages.borrow()[0].text, "hi");
}

#[test]
fn sequential_submits_appear_in_server_order() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("T1");

    block_on(submit_message(&api, &session, "hello")).expect("post");
    block_on(submit_message(&api, &session, "world")).expect("post");
    let list = block_on(messages(&api, &session)).expect("fetch");

    let texts: Vec<&str> = list.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["hello", "world"]);
}

#[test]
fn submit_failure_propagates_the_error() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("wrong");

    let err = block_on(submit_message(&api, &session, "hello")).expect_err("rejected");

    assert_eq!(err, ApiError::Unauthorized);
}

// =============================================================
// Comment composer
// =============================================================

#[test]
fn comments_stay_under_their_message() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("T1");

    block_on(submit_comment(&api, &session, "m-1", "first")).expect("post");
    block_on(submit_comment(&api, &session, "m-2", "other")).expect("post");
    let thread = block_on(comments(&api, &session, "m-1")).expect("fetch");

    assert_eq!(
        thread,
        vec![Comment {
            text: "first".to_owned()
        }]
    );
}

#[test]
fn blank_comment_issues_no_post() {
    let api = FakeBoard::accepting("T1");
    let session = session_with("T1");

    let sent = block_on(submit_comment(&api, &session, "m-1", "\n\t")).expect("no-op");

    assert!(!sent);
    assert_eq!(*api.posts.borrow(), 0);
}
