// VersionLister trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    Cursor,
    Error,
    ListingPage,
};

/// `VersionLister` represents an endpoint that can list every object version
/// and delete marker in a bucket, one page at a time.
///
/// This trait should be implemented by all `Client`s that can be aggregated.
#[async_trait]
pub trait VersionLister {
    /// Returns the page of `bucket` starting at `cursor`, or the first page
    /// if `cursor` is `None`.
    async fn list_page(
        &self,
        bucket: &str,
        cursor: Option<&Cursor>,
    ) -> Result<ListingPage, Error>;
}
