use crate::{
    constants::{
        RAW_CONSTELLATION_BEIDOU, RAW_CONSTELLATION_GALILEO, RAW_CONSTELLATION_GLONASS,
        RAW_CONSTELLATION_GPS,
    },
    prelude::Error,
};

use gnss::prelude::Constellation as GnssConstellation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Constellation] our sky plot knows how to represent.
/// Any other satellite system is classified as [Constellation::Unknown]
/// and is never plotted.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constellation {
    /// American GPS constellation
    GPS,
    /// Russian Glonass constellation
    #[cfg_attr(feature = "serde", serde(alias = "glonass", alias = "GLONASS"))]
    Glonass,
    /// European Galileo constellation
    #[cfg_attr(feature = "serde", serde(alias = "galileo", alias = "GALILEO"))]
    Galileo,
    /// Chinese BeiDou constellation
    #[cfg_attr(feature = "serde", serde(alias = "beidou", alias = "BEIDOU"))]
    BeiDou,
    /// Unsupported or undetermined satellite system
    #[default]
    Unknown,
}

/// 8 bit RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Constellation {
    /// All [Constellation]s that may be plotted, in filter order.
    pub const KNOWN: [Self; 4] = [Self::GPS, Self::Glonass, Self::Galileo, Self::BeiDou];

    /// Classifies a raw platform constellation code.
    /// Unmapped codes (SBAS, QZSS, IRNSS..) yield [Constellation::Unknown].
    pub fn classify(raw: i32) -> Self {
        match raw {
            RAW_CONSTELLATION_GPS => Self::GPS,
            RAW_CONSTELLATION_GLONASS => Self::Glonass,
            RAW_CONSTELLATION_GALILEO => Self::Galileo,
            RAW_CONSTELLATION_BEIDOU => Self::BeiDou,
            _ => Self::Unknown,
        }
    }

    /// Returns true if this is not [Constellation::Unknown]
    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    /// Color this [Constellation] is drawn with.
    pub fn color(&self) -> Rgb {
        match self {
            Self::GPS => Rgb(0x00, 0xff, 0x00),
            Self::Glonass => Rgb(0xff, 0x00, 0x00),
            Self::Galileo => Rgb(0x00, 0x00, 0xff),
            Self::BeiDou => Rgb(0xff, 0xff, 0x00),
            Self::Unknown => Rgb(0x88, 0x88, 0x88),
        }
    }

    /// Converts to [GnssConstellation], for interfacing with the rest
    /// of the GNSS ecosystem. [Constellation::Unknown] has no counterpart.
    pub fn to_gnss(&self) -> Option<GnssConstellation> {
        match self {
            Self::GPS => Some(GnssConstellation::GPS),
            Self::Glonass => Some(GnssConstellation::Glonass),
            Self::Galileo => Some(GnssConstellation::Galileo),
            Self::BeiDou => Some(GnssConstellation::BeiDou),
            Self::Unknown => None,
        }
    }
}

impl From<GnssConstellation> for Constellation {
    fn from(constellation: GnssConstellation) -> Self {
        match constellation {
            GnssConstellation::GPS => Self::GPS,
            GnssConstellation::Glonass => Self::Glonass,
            GnssConstellation::Galileo => Self::Galileo,
            GnssConstellation::BeiDou => Self::BeiDou,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Constellation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GPS => write!(f, "GPS"),
            Self::Glonass => write!(f, "GLONASS"),
            Self::Galileo => write!(f, "Galileo"),
            Self::BeiDou => write!(f, "BeiDou"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl std::str::FromStr for Constellation {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gps" => Ok(Self::GPS),
            "glonass" | "glo" => Ok(Self::Glonass),
            "galileo" | "gal" => Ok(Self::Galileo),
            "beidou" | "bds" => Ok(Self::BeiDou),
            _ => Err(Error::UnknownConstellation(s.to_string())),
        }
    }
}
