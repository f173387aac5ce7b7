//! Durable storage for the session token.
//!
//! The token lives under a single well-known `localStorage` key so it
//! survives a page reload. The store is passed by reference to every
//! consumer instead of living in a module-level singleton, so tests can
//! substitute an in-memory double.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "mural_token";

/// Get/set/clear access to the persisted session token.
///
/// No validation and no expiry: whatever string was last stored is what
/// comes back.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn get(&self) -> Option<String>;

    /// Persist `token`, overwriting any prior value.
    fn set(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}

/// Token store backed by the browser's `localStorage`.
///
/// Outside the browser build this is inert: reads yield `None` and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }
}

/// In-memory token store used as a test double.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
