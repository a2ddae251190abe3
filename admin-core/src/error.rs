use thiserror::Error;

/// Failure taxonomy for the Remote Collection Client.
///
/// Callers need to tell the two apart: a transport failure gets a generic
/// message and leaves view state alone, while a rejection carries the
/// backend's own message (e.g. a duplicate username) and is shown verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Network-level failure or an unparseable response; no server verdict.
    #[error("request failed: {0}")]
    Transport(String),

    /// Well-formed `{error}` payload from the backend.
    #[error("{0}")]
    Rejected(String),
}
