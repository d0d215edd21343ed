// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    Credentials,
    Region,
};

/// Client configuration.
#[derive(Debug)]
pub struct ClientConfig {
    /// The bucket name that the client should report the size of.
    pub bucket_name: String,

    /// Application key used to sign requests.
    pub credentials: Credentials,

    /// The B2 region, which also decides the endpoint we talk to.
    pub region: Region,
}
