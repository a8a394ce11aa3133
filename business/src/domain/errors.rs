/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Errors raised by adapters talking to upstream services (catalog, cart).
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a response (connection refused, timeout, DNS).
    #[error("upstream.transport")]
    Transport,
    /// The upstream answered with a status the adapter does not handle.
    #[error("upstream.unexpected_status: {0}")]
    UnexpectedStatus(u16),
    /// The body could not be decoded or carried invalid values.
    #[error("upstream.invalid_response")]
    InvalidResponse,
}
