use thiserror::Error;

/// Errors surfaced by the client.
///
/// `Display` always yields the best-effort human-readable message; transport
/// and decoding causes stay attached as sources.
#[derive(Debug, Error)]
pub enum AiError {
    /// The endpoint rejected the request, or answered with a body the
    /// operation could not use (e.g. an empty `choices` array).
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// The request never produced an HTTP response.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A response body could not be decoded as the expected JSON shape.
    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The HTTP transport could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(String),
}
