#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Constellation, SV};

/// [SatelliteRecord] describes one satellite reported by a
/// satellite status event. Records are built fresh on every event
/// and never modified afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteRecord {
    /// Satellite identification number, within its constellation
    pub id: u16,
    /// Azimuth angle from the observer, in degrees (0 = north), within [0, 360)
    pub azimuth_deg: f64,
    /// Elevation angle above the horizon, in degrees, within [-90, 90]
    pub elevation_deg: f64,
    /// Raw constellation code, as reported by the platform
    pub constellation_raw: i32,
    /// Carrier to noise density, in dB-Hz
    pub snr: f64,
    /// Satellite is currently used in the fix
    pub is_active: bool,
}

impl SatelliteRecord {
    /// Builds a new [SatelliteRecord]
    pub fn new(
        id: u16,
        azimuth_deg: f64,
        elevation_deg: f64,
        constellation_raw: i32,
        snr: f64,
    ) -> Self {
        Self {
            id,
            azimuth_deg,
            elevation_deg,
            constellation_raw,
            snr,
            is_active: false,
        }
    }

    /// Copies and marks this [SatelliteRecord] as used in the fix.
    pub fn with_active(&self, is_active: bool) -> Self {
        let mut s = *self;
        s.is_active = is_active;
        s
    }

    /// [Constellation] this satellite belongs to
    pub fn constellation(&self) -> Constellation {
        Constellation::classify(self.constellation_raw)
    }

    /// [SV] identity of this satellite, when it belongs to a known
    /// [Constellation] and its number fits a PRN.
    pub fn sv(&self) -> Option<SV> {
        let constellation = self.constellation().to_gnss()?;
        let prn = u8::try_from(self.id).ok()?;
        Some(SV::new(constellation, prn))
    }

    /// Returns true if this record carries a usable signal sample.
    pub fn has_signal(&self) -> bool {
        self.snr > 0.0
    }

    /// Returns true if elevation lies between horizon and zenith.
    pub(crate) fn above_horizon(&self) -> bool {
        (0.0..=90.0).contains(&self.elevation_deg)
    }
}
