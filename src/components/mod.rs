//! View components: the route guard and the list+compose panels.

pub mod comment_thread;
pub mod message_panel;
pub mod require_auth;
