// Errors surfaced by bucket aggregation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use thiserror::Error;

/// Everything that can stop an aggregation.
///
/// All variants are terminal for the current attempt. None of them carry a
/// partial total.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The region isn't in the endpoint registry.
    #[error("Unknown region '{region}'. Valid regions are: {valid}")]
    UnknownRegion {
        /// The region that was requested.
        region: String,

        /// Comma separated list of the regions we do know about.
        valid: String,
    },

    /// The endpoint rejected the credentials, or none were given.
    #[error("Invalid credentials ({0}). Please check your App Key ID and App Key.")]
    Authentication(String),

    /// The bucket doesn't exist at the endpoint.
    #[error("Bucket '{0}' not found. Please check the bucket name.")]
    BucketNotFound(String),

    /// Any other failure talking to the endpoint.
    #[error("An unexpected error occurred: {0}")]
    Transport(String),

    /// The caller asked us to stop between pages.
    #[error("Bucket size calculation was cancelled")]
    Cancelled,
}
