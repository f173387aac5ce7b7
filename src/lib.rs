//! # mural
//!
//! Leptos + WASM single-page client for a token-authenticated message
//! board with nested comments. The remote HTTP API that owns accounts,
//! messages, and comments is an external service; this crate is the
//! browser-side session lifecycle, the route guard, and the views.
//!
//! Browser-only code (HTTP, localStorage) is gated behind the `csr`
//! feature so the state and session logic compiles and tests natively.

pub mod app;
pub mod auth;
pub mod board;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;
