// Rendering of bucket totals for people
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;
use super::{
    AggregationResult,
    HumanSize,
    Scale,
    SizeUnit,
};

/// Human readable renditions of a byte count.
///
/// These are for display only. The byte count itself is the authoritative
/// value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplaySizes {
    /// Raw byte count.
    pub bytes: String,

    /// Megabytes, powers of 1000.
    pub decimal_mb: String,

    /// Gigabytes, powers of 1000.
    pub decimal_gb: String,

    /// Megabytes, powers of 1024.
    pub binary_mb: String,

    /// Gigabytes, powers of 1024.
    pub binary_gb: String,
}

impl From<u64> for DisplaySizes {
    fn from(bytes: u64) -> Self {
        Self {
            bytes:      bytes.humansize(&SizeUnit::Bytes),
            decimal_mb: bytes.humansize(&SizeUnit::Decimal(Scale::Mega)),
            decimal_gb: bytes.humansize(&SizeUnit::Decimal(Scale::Giga)),
            binary_mb:  bytes.humansize(&SizeUnit::Binary(Scale::Mega)),
            binary_gb:  bytes.humansize(&SizeUnit::Binary(Scale::Giga)),
        }
    }
}

/// Returns the line shown while a bucket is still being listed.
pub fn running_total(bytes: u64) -> String {
    format!(
        "Running Total: {}",
        bytes.humansize(&SizeUnit::Decimal(Scale::Giga)),
    )
}

/// The final report for a bucket.
#[derive(Debug)]
pub struct SizeReport<'a> {
    bucket_name: &'a str,
    result:      AggregationResult,
}

impl<'a> SizeReport<'a> {
    /// Returns a new `SizeReport` for `bucket_name`.
    pub fn new(bucket_name: &'a str, result: AggregationResult) -> Self {
        Self {
            bucket_name: bucket_name,
            result:      result,
        }
    }
}

impl fmt::Display for SizeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes = DisplaySizes::from(self.result.total_bytes);

        writeln!(f, "Bucket: {}", self.bucket_name)?;
        writeln!(f, "Total Size: {} bytes", sizes.bytes)?;
        writeln!(
            f,
            "Total Size in decimal (base 10): {} ({})",
            sizes.decimal_mb,
            sizes.decimal_gb,
        )?;
        writeln!(
            f,
            "Total Size in binary (base 2): {} ({})",
            sizes.binary_mb,
            sizes.binary_gb,
        )?;
        write!(f, "Total File Count: {}", self.result.total_count)
    }
}
