use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing failed.
    ///
    /// Argon2 only fails on invalid parameters or a broken RNG, neither of which a
    /// client can trigger. Results in a 500 Internal Server Error.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Signing a bearer token failed.
    #[error("Failed to issue token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),
}
