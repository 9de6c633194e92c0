use log::{trace, warn};

use nalgebra::{Rotation2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::ZENITH_DEG,
    prelude::{Constellation, ConstellationFilter, SatelliteRecord},
};

/// Satellite position on the sky plot.
/// Coordinates are expressed from the plot center, `x` growing to the right
/// and `y` growing downward, so that north sits on top of a non rotated plot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlotPoint {
    /// Satellite identification number, for labeling
    pub satellite_id: u16,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// [Constellation], for color mapping
    pub constellation: Constellation,
}

impl PlotPoint {
    /// Distance to the plot center
    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Concentric circle of the sky plot grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRing {
    /// Ring radius
    pub radius: f64,
    /// Elevation angle (degrees) this ring represents
    pub elevation_deg: f64,
}

/// Projects satellites onto a sky plot of given radius.
///
/// Each record is classified first: satellites of [Constellation::Unknown]
/// are never plotted, satellites hidden by the [ConstellationFilter] are skipped.
/// Remaining satellites are placed at `radius * (90 - elevation) / 90` from the center,
/// along their azimuth, then the plot is rotated by `heading` (radians).
///
/// Output order follows input order. Elevations outside [0, 90] are not clamped,
/// they project outside of the plot disk.
pub fn project(
    records: &[SatelliteRecord],
    filter: &ConstellationFilter,
    heading: f64,
    radius: f64,
) -> Vec<PlotPoint> {
    let rotation = Rotation2::new(heading);

    records
        .iter()
        .filter_map(|rec| {
            let constellation = rec.constellation();

            if !constellation.is_known() || !filter.is_visible(constellation) {
                return None;
            }

            if !rec.above_horizon() {
                warn!(
                    "{}({}) - elevation {:.3}° out of plot range",
                    constellation, rec.id, rec.elevation_deg
                );
            }

            let adjusted = radius * (ZENITH_DEG - rec.elevation_deg) / ZENITH_DEG;
            let (az_sin, az_cos) = rec.azimuth_deg.to_radians().sin_cos();

            let xy = rotation * Vector2::new(adjusted * az_sin, -adjusted * az_cos);

            trace!(
                "{}({}) - az={:.3}° el={:.3}° (x={:.3}, y={:.3})",
                constellation,
                rec.id,
                rec.azimuth_deg,
                rec.elevation_deg,
                xy[0],
                xy[1]
            );

            Some(PlotPoint {
                satellite_id: rec.id,
                x: xy[0],
                y: xy[1],
                constellation,
            })
        })
        .collect()
}

/// [SkyProjector] holds the sky plot geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyProjector {
    /// Plot radius, which is horizon distance to the center
    pub radius: f64,
}

impl SkyProjector {
    /// Builds a new [SkyProjector] of given radius
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Builds the largest [SkyProjector] that fits in a viewport
    pub fn fit(width: f64, height: f64) -> Self {
        Self::new(width.min(height) / 2.0)
    }

    /// See [project]
    pub fn project(
        &self,
        records: &[SatelliteRecord],
        filter: &ConstellationFilter,
        heading: f64,
    ) -> Vec<PlotPoint> {
        project(records, filter, heading, self.radius)
    }

    /// Evenly spaced concentric [GridRing]s, from the innermost
    /// to the horizon circle.
    pub fn grid(&self, rings: usize) -> Vec<GridRing> {
        (1..=rings)
            .map(|i| {
                let fraction = i as f64 / rings as f64;
                GridRing {
                    radius: self.radius * fraction,
                    elevation_deg: ZENITH_DEG * (1.0 - fraction),
                }
            })
            .collect()
    }
}
