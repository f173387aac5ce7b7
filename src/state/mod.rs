//! Shared client-side state.
//!
//! The session model is a plain struct held in an `RwSignal` provided via
//! context, so the transition logic stays testable without a browser.

pub mod session;
