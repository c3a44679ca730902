//! Shared utilities: hook generation, validation helpers, request parsing.

pub mod base_url;
pub mod client_ip;
pub mod expiration;
pub mod hook;
pub mod url_check;
pub mod user_agent;
