use thiserror::Error;

/// Domain errors for verse retrieval.
///
/// Transport-level failures (DNS, TLS, socket I/O) are not represented
/// here; they propagate through `anyhow` at the call sites that perform
/// I/O. These variants cover the failures the rest of the system makes
/// decisions on.
#[derive(Debug, Error)]
pub enum VerseError {
    /// No API key was supplied. Raised before any network call is made.
    #[error("no API key found; pass --api-key or set SCRIPTURE_API_KEY")]
    CredentialsMissing,

    /// The remote service answered with a non-success HTTP status.
    /// Never retried; the original status and body are surfaced as-is.
    #[error("API request failed with HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// A JSON key or path the response contract promises was absent.
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// Interactive input matched neither a code nor a name. Recovered
    /// locally by the prompt loop, never surfaced as a process failure.
    #[error("invalid selection")]
    InvalidSelection,

    /// The verse catalog has no entries to pick from.
    #[error("verse catalog is empty")]
    EmptyCatalog,
}
