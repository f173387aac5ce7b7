use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::storage::MemoryStore;

/// Fake remote API holding a set of accounts.
///
/// Tokens are deterministic per email so register-then-login equivalence
/// can be asserted structurally.
struct FakeAuth {
    accounts: RefCell<Vec<(String, String)>>,
    login_calls: RefCell<u32>,
}

impl FakeAuth {
    fn empty() -> Self {
        Self {
            accounts: RefCell::new(Vec::new()),
            login_calls: RefCell::new(0),
        }
    }

    fn with_account(email: &str, senha: &str) -> Self {
        let api = Self::empty();
        api.accounts
            .borrow_mut()
            .push((email.to_owned(), senha.to_owned()));
        api
    }
}

impl AuthApi for FakeAuth {
    async fn login(&self, email: &str, senha: &str) -> Result<String, ApiError> {
        *self.login_calls.borrow_mut() += 1;
        let accepted = self
            .accounts
            .borrow()
            .iter()
            .any(|(e, s)| e == email && s == senha);
        if accepted {
            Ok(format!("tok-{email}"))
        } else {
            Err(ApiError::Authentication)
        }
    }

    async fn signup(&self, nome: &str, email: &str, senha: &str) -> Result<(), ApiError> {
        let _ = nome;
        if self.accounts.borrow().iter().any(|(e, _)| e == email) {
            return Err(ApiError::Registration(
                "an account with this email already exists".to_owned(),
            ));
        }
        self.accounts
            .borrow_mut()
            .push((email.to_owned(), senha.to_owned()));
        Ok(())
    }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_authenticates_and_persists_the_token() {
    let api = FakeAuth::with_account("a@x.com", "pw1");
    let store = MemoryStore::default();

    let state = block_on(login(&api, &store, "a@x.com", "pw1")).expect("login");

    assert!(state.is_authenticated());
    assert_eq!(state.identity.as_ref().map(|id| id.email.as_str()), Some("a@x.com"));
    assert_eq!(store.get(), state.token);
    assert!(!store.get().expect("persisted token").is_empty());
}

#[test]
fn login_failure_persists_nothing() {
    let api = FakeAuth::with_account("a@x.com", "pw1");
    let store = MemoryStore::default();

    let err = block_on(login(&api, &store, "a@x.com", "wrong")).expect_err("rejected");

    assert_eq!(err, ApiError::Authentication);
    assert_eq!(store.get(), None);
}

#[test]
fn login_failure_leaves_a_prior_token_alone() {
    let api = FakeAuth::with_account("a@x.com", "pw1");
    let store = MemoryStore::default();
    store.set("old-token");

    let _ = block_on(login(&api, &store, "b@x.com", "pw2")).expect_err("rejected");

    assert_eq!(store.get(), Some("old-token".to_owned()));
}

// =============================================================
// register
// =============================================================

#[test]
fn register_matches_a_subsequent_login() {
    let registered = {
        let api = FakeAuth::empty();
        let store = MemoryStore::default();
        block_on(register(&api, &store, "Ana", "a@x.com", "pw1")).expect("register")
    };
    let logged_in = {
        let api = FakeAuth::with_account("a@x.com", "pw1");
        let store = MemoryStore::default();
        block_on(login(&api, &store, "a@x.com", "pw1")).expect("login")
    };

    assert_eq!(registered, logged_in);
}

#[test]
fn register_duplicate_email_never_attempts_login() {
    let api = FakeAuth::with_account("a@x.com", "pw1");
    let store = MemoryStore::default();

    let err = block_on(register(&api, &store, "Ana", "a@x.com", "pw2")).expect_err("rejected");

    assert!(matches!(err, ApiError::Registration(_)));
    assert_eq!(*api.login_calls.borrow(), 0);
    assert_eq!(store.get(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_the_token_and_denies_the_guard() {
    let api = FakeAuth::with_account("a@x.com", "pw1");
    let store = MemoryStore::default();
    let _ = block_on(login(&api, &store, "a@x.com", "pw1")).expect("login");

    let state = logout(&store);

    assert!(!state.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryStore::default();
    store.set("T1");

    let once = logout(&store);
    let twice = logout(&store);

    assert_eq!(once, twice);
    assert_eq!(store.get(), None);
}

// =============================================================
// startup restore
// =============================================================

#[test]
fn restore_with_a_persisted_token_is_authenticated_without_identity() {
    let store = MemoryStore::default();
    store.set("T1");

    let state = restore(&store);

    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("T1"));
    assert!(state.identity.is_none());
}

#[test]
fn restore_without_a_token_is_anonymous() {
    let store = MemoryStore::default();
    assert_eq!(restore(&store), SessionState::default());
}
