// Implement the VersionLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    Cursor,
    Error,
    ListingPage,
    VersionLister,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl VersionLister for Client {
    /// Return a page of object versions and delete markers from S3.
    async fn list_page(
        &self,
        bucket: &str,
        cursor: Option<&Cursor>,
    ) -> Result<ListingPage, Error> {
        let page = self.list_object_versions(bucket, cursor).await?;

        debug!(
            "list_page: '{}' returned {} versions, {} delete markers, more: {}",
            bucket,
            page.versions.len(),
            page.delete_markers.len(),
            page.next.is_some(),
        );

        Ok(page)
    }
}
