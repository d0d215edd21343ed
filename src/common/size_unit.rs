// SizeUnit
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    FixedAt,
    FormatSizeOptions,
    Kilo,
    BINARY,
    DECIMAL,
};

/// The scale a human readable size is pinned to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scale {
    /// Megabytes.
    Mega,

    /// Gigabytes.
    Giga,
}

impl From<Scale> for FixedAt {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Mega => Self::Mega,
            Scale::Giga => Self::Giga,
        }
    }
}

/// `SizeUnit` represents how we want the bucket sizes to be displayed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeUnit {
    /// Represent bucket sizes as multiples of 1024, fixed at `Scale`.
    Binary(Scale),

    /// Represent bucket sizes as the number of bytes.
    Bytes,

    /// Represent bucket sizes as multiples of 1000, fixed at `Scale`.
    Decimal(Scale),
}

impl SizeUnit {
    /// Returns the `humansize` options for this unit, or `None` for `Bytes`.
    ///
    /// Both systems are labelled `MB`/`GB` and always show two decimal
    /// places, using `.` as the separator regardless of locale.
    pub fn format_options(&self) -> Option<FormatSizeOptions> {
        let (base, scale) = match self {
            Self::Binary(scale)  => (BINARY, scale),
            Self::Bytes          => return None,
            Self::Decimal(scale) => (DECIMAL, scale),
        };

        let options = FormatSizeOptions::from(base)
            .units(Kilo::Decimal)
            .decimal_places(2)
            .decimal_zeroes(2)
            .fixed_at(Some((*scale).into()));

        Some(options)
    }
}
