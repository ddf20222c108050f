//! Authentication module
//!
//! Credentials login: hostname, username, password and an optional
//! one-time password are exchanged for a bearer token.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{LoginRequest, LoginResponse, CREDENTIALS_ENDPOINT};

#[cfg(test)]
mod tests;
