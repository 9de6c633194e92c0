#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constellation;
mod error;
mod filter;
mod record;
mod skyview;

// public modules
pub mod constants;
pub mod coordinates;
pub mod projection;
pub mod signal;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::constellation::{Constellation, Rgb};
    pub use crate::coordinates::CoordinateFormat;
    pub use crate::error::Error;
    pub use crate::filter::ConstellationFilter;
    pub use crate::projection::{GridRing, PlotPoint, SkyProjector};
    pub use crate::record::SatelliteRecord;
    pub use crate::signal::{SignalBar, SignalSnapshot};
    pub use crate::skyview::{Frame, SkyView};
    // re-export
    pub use gnss::prelude::SV;
}

// pub export
pub use error::Error;
