//! Error types for blogroll-hashnode.

use thiserror::Error;

/// All errors that can arise from fetching posts.
///
/// Every variant is fatal for a sync run; no file is mutated after a fetch
/// failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success HTTP status.
    #[error("content API returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// The request never got an HTTP answer (DNS, TLS, connection refused).
    #[error("could not reach content API: {message}")]
    Transport { message: String },

    /// The GraphQL layer reported errors in an otherwise successful response.
    #[error("content API rejected the query: {message}")]
    Api { message: String },

    /// The response parsed but carried no publication for the given host.
    #[error("no publication found for host '{host}'")]
    PublicationNotFound { host: String },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed content API payload: {message}")]
    Malformed { message: String },
}
