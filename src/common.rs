// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client_config;
mod credentials;
mod error;
mod human_size;
mod listing;
mod region;
mod size_report;
mod size_unit;
mod version_lister;

pub use client_config::*;
pub use credentials::*;
pub use error::*;
pub use human_size::*;
pub use listing::*;
pub use region::*;
pub use size_report::*;
pub use size_unit::*;
pub use version_lister::*;
