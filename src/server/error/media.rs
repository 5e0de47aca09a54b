use thiserror::Error;

/// Failures talking to the hosted media service.
#[derive(Error, Debug)]
pub enum MediaError {
    /// Transport-level failure (DNS, TLS, timeout, body decoding).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The media host answered with a non-success status.
    #[error("Media host returned {status}: {message}")]
    Api {
        /// HTTP status returned by the host
        status: u16,
        /// Error message extracted from the host's response body
        message: String,
    },
}
