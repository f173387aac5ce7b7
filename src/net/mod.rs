//! Remote API surface: base address, wire types, error taxonomy, and the
//! HTTP client.

pub mod api;
pub mod error;
pub mod types;

/// Base address of the remote API, fixed at compile time.
///
/// Override with the `MURAL_API` environment variable when building.
pub const API_BASE: &str = match option_env!("MURAL_API") {
    Some(base) => base,
    None => "http://localhost:3333",
};
