pub mod money;
pub mod notice;
pub mod session;

/// Failure taxonomy shared by every storefront component.
///
/// Nothing here is process-fatal: every variant resolves to a user-facing
/// notice and leaves previously loaded state intact.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network-level failure; the remote service was never reached or the
    /// connection dropped mid-flight.
    #[error("request failed: {0}")]
    Transport(String),

    /// The session credential is absent, expired, or rejected.
    #[error("not signed in: {0}")]
    Unauthorized(String),

    /// The remote service rejected the call for a business reason. The
    /// message is surfaced verbatim, never re-derived client-side.
    #[error("{0}")]
    Service(String),

    /// The payment gateway could not be opened or misbehaved.
    #[error("payment gateway error: {0}")]
    Gateway(String),

    /// The remote payload did not have the expected shape.
    #[error("unexpected payload: {0}")]
    Malformed(String),
}

impl ClientError {
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
