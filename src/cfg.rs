#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::SNR_REFERENCE_DBHZ,
    prelude::{ConstellationFilter, CoordinateFormat, Error},
};

fn default_radius() -> f64 {
    100.0
}

fn default_snr_reference() -> f64 {
    SNR_REFERENCE_DBHZ
}

/// [SkyView] session configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Sky plot radius, which is the horizon circle radius.
    #[cfg_attr(feature = "serde", serde(default = "default_radius"))]
    pub radius: f64,

    /// [CoordinateFormat] used when displaying geodetic fixes
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinate_format: CoordinateFormat,

    /// Initial [ConstellationFilter]
    #[cfg_attr(feature = "serde", serde(default))]
    pub filter: ConstellationFilter,

    /// Full scale of the signal quality chart, in dB-Hz
    #[cfg_attr(feature = "serde", serde(default = "default_snr_reference"))]
    pub snr_reference_dbhz: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            coordinate_format: CoordinateFormat::default(),
            filter: ConstellationFilter::default(),
            snr_reference_dbhz: default_snr_reference(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated sky plot radius
    pub fn with_radius(&self, radius: f64) -> Self {
        let mut s = self.clone();
        s.radius = radius;
        s
    }

    /// Copies and returns [Config] with updated [CoordinateFormat]
    pub fn with_coordinate_format(&self, format: CoordinateFormat) -> Self {
        let mut s = self.clone();
        s.coordinate_format = format;
        s
    }

    /// Copies and returns [Config] with updated [ConstellationFilter]
    pub fn with_filter(&self, filter: ConstellationFilter) -> Self {
        let mut s = self.clone();
        s.filter = filter;
        s
    }

    /// Copies and returns [Config] with updated chart full scale (dB-Hz)
    pub fn with_snr_reference(&self, snr_reference_dbhz: f64) -> Self {
        let mut s = self.clone();
        s.snr_reference_dbhz = snr_reference_dbhz;
        s
    }

    /// Verifies this [Config] is usable
    pub fn validate(&self) -> Result<(), Error> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidRadius(self.radius));
        }
        if !self.snr_reference_dbhz.is_finite() || self.snr_reference_dbhz <= 0.0 {
            return Err(Error::InvalidSnrReference(self.snr_reference_dbhz));
        }
        Ok(())
    }
}
