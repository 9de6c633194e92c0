mod scenario;

use log::LevelFilter;
use std::sync::Once;

use crate::{
    constants::{
        RAW_CONSTELLATION_BEIDOU, RAW_CONSTELLATION_GALILEO, RAW_CONSTELLATION_GLONASS,
        RAW_CONSTELLATION_GPS, RAW_CONSTELLATION_QZSS, RAW_CONSTELLATION_SBAS,
    },
    prelude::SatelliteRecord,
};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

/// Satellite status event, as received at the reference site:
/// 3 GPS, 2 Glonass, 2 Galileo, 2 BeiDou, 1 SBAS and 1 QZSS.
pub fn reference_status() -> Vec<SatelliteRecord> {
    vec![
        SatelliteRecord::new(2, 47.2, 61.0, RAW_CONSTELLATION_GPS, 42.0).with_active(true),
        SatelliteRecord::new(5, 301.7, 22.4, RAW_CONSTELLATION_GPS, 33.5).with_active(true),
        SatelliteRecord::new(13, 178.0, 8.9, RAW_CONSTELLATION_GPS, 0.0),
        SatelliteRecord::new(7, 120.3, 44.1, RAW_CONSTELLATION_GLONASS, 38.0).with_active(true),
        SatelliteRecord::new(16, 250.9, 15.2, RAW_CONSTELLATION_GLONASS, 21.0),
        SatelliteRecord::new(11, 15.0, 72.6, RAW_CONSTELLATION_GALILEO, 45.5).with_active(true),
        SatelliteRecord::new(36, 205.5, 33.3, RAW_CONSTELLATION_GALILEO, 36.0),
        SatelliteRecord::new(23, 95.4, 51.8, RAW_CONSTELLATION_BEIDOU, 40.0).with_active(true),
        SatelliteRecord::new(42, 333.1, 4.0, RAW_CONSTELLATION_BEIDOU, -1.0),
        SatelliteRecord::new(123, 160.0, 38.0, RAW_CONSTELLATION_SBAS, 39.0),
        SatelliteRecord::new(194, 140.2, 28.5, RAW_CONSTELLATION_QZSS, 31.0),
    ]
}
