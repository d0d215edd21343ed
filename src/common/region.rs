// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use super::Error;
use tracing::debug;

/// Region selected when none is given on the command line.
pub const DEFAULT_REGION: &str = "us-west-004";

/// B2 regions and their S3 compatible endpoints.
static ENDPOINTS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("ca-east-006",    "https://s3.ca-east-006.backblazeb2.com"),
        ("eu-central-003", "https://s3.eu-central-003.backblazeb2.com"),
        ("us-east-005",    "https://s3.us-east-005.backblazeb2.com"),
        ("us-west-000",    "https://s3.us-west-000.backblazeb2.com"),
        ("us-west-001",    "https://s3.us-west-001.backblazeb2.com"),
        ("us-west-002",    "https://s3.us-west-002.backblazeb2.com"),
        ("us-west-004",    "https://s3.us-west-004.backblazeb2.com"),
    ])
});

/// Returns the endpoint URL for the given B2 `region`.
pub fn resolve(region: &str) -> Result<&'static str, Error> {
    let (_, endpoint) = lookup(region)?;

    Ok(endpoint)
}

// Registry lookup returning both the 'static name and the endpoint.
fn lookup(region: &str) -> Result<(&'static str, &'static str), Error> {
    match ENDPOINTS.get_key_value(region) {
        Some((name, endpoint)) => {
            debug!("lookup: '{}' -> '{}'", name, endpoint);

            Ok((*name, *endpoint))
        },
        None => {
            Err(Error::UnknownRegion {
                region: region.into(),
                valid:  region_names().join(", "),
            })
        },
    }
}

/// Returns the names of all known regions, sorted.
pub fn region_names() -> Vec<&'static str> {
    ENDPOINTS.keys().copied().collect()
}

/// A B2 region along with the endpoint it resolves to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Region {
    name:     &'static str,
    endpoint: &'static str,
}

impl Region {
    /// Look up `name` in the endpoint registry.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let (name, endpoint) = lookup(name)?;

        Ok(Self {
            name:     name,
            endpoint: endpoint,
        })
    }

    /// Returns the region name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the endpoint URL for this region.
    pub fn endpoint(&self) -> &str {
        self.endpoint
    }
}

impl ProvideRegion for Region {
    // B2 wants requests signed for the region name itself, so hand the SDK
    // exactly that.
    fn region(&self) -> future::ProvideRegion {
        let region = region::Region::from_static(self.name);

        future::ProvideRegion::ready(Some(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_known() {
        let tests = vec![
            ("us-west-000",    "https://s3.us-west-000.backblazeb2.com"),
            ("us-west-004",    "https://s3.us-west-004.backblazeb2.com"),
            ("eu-central-003", "https://s3.eu-central-003.backblazeb2.com"),
            ("ca-east-006",    "https://s3.ca-east-006.backblazeb2.com"),
        ];

        for test in tests {
            let region   = test.0;
            let expected = test.1;

            let ret = resolve(region).unwrap();

            assert_eq!(ret, expected);
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let ret = resolve("nonexistent-region");

        let expected = Err(Error::UnknownRegion {
            region: "nonexistent-region".into(),
            valid:  region_names().join(", "),
        });

        assert_eq!(ret, expected);
    }

    #[test]
    fn test_every_region_has_one_endpoint() {
        let names = region_names();

        assert_eq!(names.len(), 7);

        for name in names {
            let endpoint = resolve(name).unwrap();
            let expected = format!("https://s3.{}.backblazeb2.com", name);

            assert_eq!(endpoint, expected);
        }
    }

    #[test]
    fn test_region_from_name() {
        let region = Region::from_name("us-east-005").unwrap();

        assert_eq!(region.name(), "us-east-005");
        assert_eq!(region.endpoint(), "https://s3.us-east-005.backblazeb2.com");

        assert!(Region::from_name("eu-west-1").is_err());
    }
}
