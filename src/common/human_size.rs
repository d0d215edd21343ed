// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::SizeUnit;
use humansize::format_size;
use tracing::trace;

/// `HumanSize` trait.
pub trait HumanSize {
    /// Return `self` formatted according to `unit`.
    fn humansize(&self, unit: &SizeUnit) -> String;
}

/// `HumanSize` trait implementation for `u64`.
impl HumanSize for u64 {
    fn humansize(&self, unit: &SizeUnit) -> String {
        trace!("humansize: size {}, unit {:?}", self, unit);

        match unit.format_options() {
            Some(options) => format_size(*self, options),
            None          => self.to_string(),
        }
    }
}
