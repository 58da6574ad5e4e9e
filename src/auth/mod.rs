//! Authentication module
//!
//! Supports: API token (one or more), password, HTTP Basic
//!
//! The `Authenticator` turns an `AuthConfig` into request headers. None of the
//! supported schemes need a token exchange, so applying auth never touches the
//! network.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, API_TOKEN_HEADER, PASSWORD_HEADER};
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
