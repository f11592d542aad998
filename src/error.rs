use thiserror::Error;

/// Errors raised while deriving routing state from a response.
///
/// Each variant carries the offending header value verbatim so the
/// caller can abandon the affected branch with a precise diagnostic.
/// This layer never retries, recovers, or logs an error away; every
/// failure is surfaced to the dialog owner that invoked it.
///
/// Absence of routing data (no Record-Route, no Contact) is not an
/// error and is reported through empty/optional results instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Record-Route entry could not be transcribed into a Route
    /// header. A partial route set must never be returned, so the
    /// whole reconstruction fails.
    #[error("cannot transcribe Record-Route into Route: {0}")]
    HeaderConstructionError(String),

    /// A Contact header is present but carries no usable URI.
    #[error("cannot resolve branch target from Contact: {0}")]
    TargetResolutionError(String),
}
