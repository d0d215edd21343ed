// B2 application key credentials
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;
use super::Error;

// Shows up as the provider name in SDK debug logging.
const PROVIDER_NAME: &str = "b2du";

/// A B2 application key ID and application key.
///
/// These are only held for the duration of a single aggregation and are never
/// written anywhere.
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials {
    key_id: String,
    key:    String,
}

impl Credentials {
    /// Returns new `Credentials`, rejecting empty values up front so that
    /// we never make a request we know will fail.
    pub fn new<S>(key_id: S, key: S) -> Result<Self, Error>
    where
        S: Into<String>,
    {
        let key_id = key_id.into();
        let key    = key.into();

        if key_id.trim().is_empty() || key.trim().is_empty() {
            let reason = "App Key ID and App Key must both be provided";

            return Err(Error::Authentication(reason.into()));
        }

        Ok(Self {
            key_id: key_id,
            key:    key,
        })
    }

    /// Returns the application key ID.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

// Never print the application key.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key", &"** redacted **")
            .finish()
    }
}

impl From<&Credentials> for aws_credential_types::Credentials {
    fn from(credentials: &Credentials) -> Self {
        Self::new(
            credentials.key_id.clone(),
            credentials.key.clone(),
            None,
            None,
            PROVIDER_NAME,
        )
    }
}
