// Listing pages and the totals built from them
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// A single stored revision of an object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionEntry {
    /// Object key.
    pub key: String,

    /// Size of this version in bytes.
    pub size: u64,
}

/// A record that an object was deleted. Counted, but has no size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteMarker {
    /// Object key.
    pub key: String,
}

/// Where the next page of a version listing starts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    /// Key to continue listing from.
    pub key_marker: Option<String>,

    /// Version ID to continue listing from.
    pub version_id_marker: Option<String>,
}

/// One page of a "list object versions" response.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListingPage {
    /// Object versions on this page.
    pub versions: Vec<VersionEntry>,

    /// Delete markers on this page.
    pub delete_markers: Vec<DeleteMarker>,

    /// Present if there are more pages to fetch.
    pub next: Option<Cursor>,
}

/// Totals for a bucket.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AggregationResult {
    /// Sum of the sizes of every object version, in bytes.
    pub total_bytes: u64,

    /// Number of object versions plus number of delete markers.
    pub total_count: u64,
}

impl AggregationResult {
    /// Count an object version, returning the new running byte total.
    pub fn add_version(&mut self, version: &VersionEntry) -> u64 {
        self.total_bytes = self.total_bytes.saturating_add(version.size);
        self.total_count += 1;

        self.total_bytes
    }

    /// Count a delete marker. Bytes are unchanged.
    pub fn add_delete_marker(&mut self, _marker: &DeleteMarker) {
        self.total_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn version(key: &str, size: u64) -> VersionEntry {
        VersionEntry {
            key:  key.into(),
            size: size,
        }
    }

    #[test]
    fn test_add_version() {
        let mut result = AggregationResult::default();

        let running = vec![
            result.add_version(&version("a", 10)),
            result.add_version(&version("b", 0)),
            result.add_version(&version("c", 32)),
        ];

        assert_eq!(running, vec![10, 10, 42]);
        assert_eq!(result, AggregationResult {
            total_bytes: 42,
            total_count: 3,
        });
    }

    #[test]
    fn test_add_delete_marker() {
        let mut result = AggregationResult::default();
        let marker     = DeleteMarker { key: "gone".into() };

        for _ in 0..4 {
            result.add_delete_marker(&marker);
        }

        assert_eq!(result, AggregationResult {
            total_bytes: 0,
            total_count: 4,
        });
    }

    #[test]
    fn test_add_version_saturates() {
        let mut result = AggregationResult {
            total_bytes: u64::MAX - 1,
            total_count: 1,
        };

        let ret = result.add_version(&version("huge", 10));

        assert_eq!(ret, u64::MAX);
    }
}
