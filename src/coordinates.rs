#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Error;

/// Number of decimal places of the last displayed unit
const DECIMALS: i32 = 5;

/// Textual notation of a geodetic coordinate
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateFormat {
    /// Signed decimal degrees: `DDD.DDDDD`
    #[default]
    Decimal,
    /// Degrees and decimal minutes: `DDD:MM.MMMMM`
    DegMin,
    /// Degrees, minutes and decimal seconds: `DDD:MM:SS.SSSSS`
    DegMinSec,
}

impl std::fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal => write!(f, "Degrees [+/-DDD.DDDDD]"),
            Self::DegMin => write!(f, "Degrees-Minutes [+/-DDD:MM.MMMMM]"),
            Self::DegMinSec => write!(f, "Degrees-Minutes-Seconds [+/-DDD:MM:SS.SSSSS]"),
        }
    }
}

impl std::str::FromStr for CoordinateFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" | "dd" | "deg" => Ok(Self::Decimal),
            "dm" | "deg-min" | "degmin" => Ok(Self::DegMin),
            "dms" | "deg-min-sec" | "degminsec" => Ok(Self::DegMinSec),
            _ => Err(Error::UnknownCoordinateFormat(s.to_string())),
        }
    }
}

/// Splits |value| into (integer degrees, fractional degree expressed in
/// `units_per_degree` sub units, rounded to [DECIMALS]).
/// Only the fractional part is scaled, rounding carries into the degree part.
fn split(magnitude: f64, units_per_degree: f64) -> (f64, f64) {
    let scale = 10.0_f64.powi(DECIMALS);
    let per_degree = units_per_degree * scale;

    let mut degrees = magnitude.trunc();
    let mut remainder = (magnitude.fract() * per_degree).round();

    if remainder >= per_degree {
        degrees += 1.0;
        remainder -= per_degree;
    }

    (degrees, remainder)
}

/// Formats a decimal geodetic coordinate (degrees) in desired notation.
///
/// Degrees are truncated toward zero and carry the sign, minutes and seconds
/// are always positive. A negative coordinate with no integer degree is still
/// signed: `-0.5` is `-0:30.00000`.
pub fn format(value: f64, mode: CoordinateFormat) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scale = 10.0_f64.powi(DECIMALS);

    match mode {
        CoordinateFormat::Decimal => {
            // values rounding to zero are unsigned
            let value = if (value * scale).round() == 0.0 {
                0.0
            } else {
                value
            };
            format!("{:.5}", value)
        },
        CoordinateFormat::DegMin => {
            let (degrees, remainder) = split(value.abs(), 60.0);
            let sign = if value < 0.0 && (degrees > 0.0 || remainder > 0.0) {
                "-"
            } else {
                ""
            };

            let minutes = (remainder / scale).trunc();
            let fraction = remainder - minutes * scale;

            format!("{}{:.0}:{:02}.{:05}", sign, degrees, minutes, fraction)
        },
        CoordinateFormat::DegMinSec => {
            let (degrees, remainder) = split(value.abs(), 3600.0);
            let sign = if value < 0.0 && (degrees > 0.0 || remainder > 0.0) {
                "-"
            } else {
                ""
            };

            let per_minute = 60.0 * scale;
            let minutes = (remainder / per_minute).trunc();
            let remainder = remainder - minutes * per_minute;
            let seconds = (remainder / scale).trunc();
            let fraction = remainder - seconds * scale;

            format!(
                "{}{:.0}:{:02}:{:02}.{:05}",
                sign, degrees, minutes, seconds, fraction
            )
        },
    }
}

/// Formats a geodetic fix, as `Lat: <latitude>, Lon: <longitude>`.
pub fn format_fix(latitude: f64, longitude: f64, mode: CoordinateFormat) -> String {
    format!(
        "Lat: {}, Lon: {}",
        format(latitude, mode),
        format(longitude, mode)
    )
}
