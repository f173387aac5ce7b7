//! Routed pages: the public auth forms and the protected board.

pub mod board;
pub mod login;
pub mod register;
