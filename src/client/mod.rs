//! HTTP client for the Kapso Platform API

pub mod auth;
pub mod http;

pub use auth::BearerAuth;
pub use http::{truncate_body, KapsoClient, USER_AGENT_STRING};
