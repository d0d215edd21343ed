// Sums every object version and delete marker in a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    AggregationResult,
    Cursor,
    Error,
    VersionLister,
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{
    debug,
    info,
    trace,
};

/// Walks every page of a bucket's version listing and totals it up.
pub struct Aggregator<'a, L: ?Sized> {
    /// Where pages come from.
    lister: &'a L,

    /// Receives the running byte total after each object version, if set.
    progress: Option<watch::Sender<u64>>,

    /// Checked before each page request.
    cancel: CancellationToken,
}

impl<'a, L> Aggregator<'a, L>
where
    L: VersionLister + ?Sized,
{
    /// Returns a new `Aggregator` reading pages from `lister`.
    pub fn new(lister: &'a L) -> Self {
        Self {
            lister:   lister,
            progress: None,
            cancel:   CancellationToken::new(),
        }
    }

    /// Publish the running byte total to `progress` as versions are counted.
    pub fn with_progress(mut self, progress: watch::Sender<u64>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Stop between pages once `cancel` is cancelled.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Return the total size and entry count of `bucket`.
    ///
    /// Any error aborts the whole aggregation, the totals gathered so far are
    /// dropped.
    pub async fn aggregate(&self, bucket: &str) -> Result<AggregationResult, Error> {
        debug!("aggregate: Listing versions in '{}'", bucket);

        let mut cursor: Option<Cursor> = None;
        let mut pages                  = 0;
        let mut result                 = AggregationResult::default();

        // Loop until the endpoint stops handing us a cursor.
        loop {
            if self.cancel.is_cancelled() {
                info!("aggregate: Cancelled after {} pages of '{}'", pages, bucket);

                return Err(Error::Cancelled);
            }

            let page = self.lister.list_page(bucket, cursor.as_ref()).await?;
            pages += 1;

            debug!(
                "aggregate: Page {} of '{}' has {} versions, {} delete markers",
                pages,
                bucket,
                page.versions.len(),
                page.delete_markers.len(),
            );

            for version in &page.versions {
                trace!("aggregate: '{}' is {} bytes", version.key, version.size);

                let running = result.add_version(version);

                if let Some(progress) = &self.progress {
                    progress.send_replace(running);
                }
            }

            for marker in &page.delete_markers {
                trace!("aggregate: '{}' is a delete marker", marker.key);

                result.add_delete_marker(marker);
            }

            match page.next {
                Some(next) => cursor = Some(next),
                None       => break,
            }
        }

        info!(
            "aggregate: '{}' holds {} bytes in {} entries over {} pages",
            bucket,
            result.total_bytes,
            result.total_count,
            pages,
        );

        Ok(result)
    }
}
