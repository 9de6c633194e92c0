/// Platform status code for GPS satellites
pub const RAW_CONSTELLATION_GPS: i32 = 1;

/// Platform status code for SBAS satellites (not plotted)
pub const RAW_CONSTELLATION_SBAS: i32 = 2;

/// Platform status code for Glonass satellites
pub const RAW_CONSTELLATION_GLONASS: i32 = 3;

/// Platform status code for QZSS satellites (not plotted)
pub const RAW_CONSTELLATION_QZSS: i32 = 4;

/// Platform status code for BeiDou satellites
pub const RAW_CONSTELLATION_BEIDOU: i32 = 5;

/// Platform status code for Galileo satellites
pub const RAW_CONSTELLATION_GALILEO: i32 = 6;

/// Full scale of the signal quality chart, in dB-Hz.
pub const SNR_REFERENCE_DBHZ: f64 = 50.0;

/// Number of concentric elevation rings drawn on a sky plot
pub const SKY_PLOT_RINGS: usize = 4;

/// Zenith elevation angle, in degrees
pub const ZENITH_DEG: f64 = 90.0;
