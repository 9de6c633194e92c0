use log::debug;

use crate::{
    coordinates::{format, format_fix},
    prelude::{
        Config, Constellation, ConstellationFilter, CoordinateFormat, Error, PlotPoint,
        SatelliteRecord, SignalBar, SignalSnapshot, SkyProjector,
    },
    signal::aggregate,
};

/// [Frame] is everything that should be displayed after one satellite status event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Sky plot content, in input order
    pub points: Vec<PlotPoint>,
    /// Signal quality snapshot
    pub signal: SignalSnapshot,
}

/// [SkyView] is the session state of a GNSS status display.
/// Feed each satellite status event to [SkyView::update], from a single
/// thread of control (or behind a single lock) so that filter updates
/// and projections do not interleave.
#[derive(Debug, Clone)]
pub struct SkyView {
    coordinate_format: CoordinateFormat,
    snr_reference_dbhz: f64,
    projector: SkyProjector,
    filter: ConstellationFilter,
    heading: f64,
    last_signal: SignalSnapshot,
}

impl SkyView {
    /// Builds a new [SkyView] from a validated [Config]
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self {
            projector: SkyProjector::new(cfg.radius),
            filter: cfg.filter,
            heading: 0.0,
            last_signal: SignalSnapshot::default(),
            coordinate_format: cfg.coordinate_format,
            snr_reference_dbhz: cfg.snr_reference_dbhz,
        })
    }

    /// Current device heading, in radians
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Updates the device heading (radians)
    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn filter(&self) -> &ConstellationFilter {
        &self.filter
    }

    /// Shows or hides one [Constellation] on subsequent projections
    pub fn set_visible(&mut self, constellation: Constellation, visible: bool) {
        debug!("{} visible: {}", constellation, visible);
        self.filter.set(constellation, visible);
    }

    /// Flips the visibility of one [Constellation], returns the new state.
    pub fn toggle(&mut self, constellation: Constellation) -> bool {
        let visible = self.filter.toggle(constellation);
        debug!("{} visible: {}", constellation, visible);
        visible
    }

    pub fn coordinate_format(&self) -> CoordinateFormat {
        self.coordinate_format
    }

    pub fn set_coordinate_format(&mut self, format: CoordinateFormat) {
        self.coordinate_format = format;
    }

    /// Formats a single coordinate in current [CoordinateFormat]
    pub fn format_coordinate(&self, value: f64) -> String {
        format(value, self.coordinate_format)
    }

    /// Formats a geodetic fix in current [CoordinateFormat]
    pub fn format_fix(&self, latitude: f64, longitude: f64) -> String {
        format_fix(latitude, longitude, self.coordinate_format)
    }

    pub fn projector(&self) -> &SkyProjector {
        &self.projector
    }

    /// Latest [SignalSnapshot], from the last [SkyView::update]
    pub fn last_signal(&self) -> &SignalSnapshot {
        &self.last_signal
    }

    /// Chart bars of the latest [SignalSnapshot], against configured full scale.
    pub fn signal_bars(&self) -> Vec<SignalBar> {
        self.last_signal.bars(self.snr_reference_dbhz)
    }

    /// Processes a new satellite status event.
    /// The resulting [SignalSnapshot] replaces the previous one entirely.
    pub fn update(&mut self, records: &[SatelliteRecord]) -> Frame {
        let points = self.projector.project(records, &self.filter, self.heading);
        let signal = aggregate(records);

        debug!(
            "status: {} satellites - {} plotted - {} with signal",
            records.len(),
            points.len(),
            signal.len()
        );

        self.last_signal = signal.clone();

        Frame { points, signal }
    }
}

#[cfg(test)]
mod test {
    use super::SkyView;
    use crate::prelude::{Config, Constellation, CoordinateFormat, Error, SatelliteRecord};

    fn assert_send<T: Send>() {}

    #[test]
    fn send() {
        assert_send::<SkyView>();
    }

    #[test]
    fn invalid_config() {
        let cfg = Config::default().with_radius(-1.0);
        assert_eq!(SkyView::new(cfg).err(), Some(Error::InvalidRadius(-1.0)));
    }

    #[test]
    fn session_state() {
        let mut view = SkyView::new(Config::default()).unwrap();

        assert_eq!(view.heading(), 0.0);
        view.set_heading(1.5);
        assert_eq!(view.heading(), 1.5);

        assert!(!view.toggle(Constellation::GPS));
        view.set_visible(Constellation::BeiDou, false);
        assert!(!view.filter().is_visible(Constellation::GPS));
        assert!(!view.filter().is_visible(Constellation::BeiDou));
        assert!(view.filter().is_visible(Constellation::Glonass));

        assert_eq!(view.format_coordinate(-0.5), "-0.50000");
        view.set_coordinate_format(CoordinateFormat::DegMin);
        assert_eq!(view.coordinate_format(), CoordinateFormat::DegMin);
        assert_eq!(view.format_coordinate(-0.5), "-0:30.00000");
    }

    #[test]
    fn snapshot_replaced() {
        let mut view = SkyView::new(Config::default()).unwrap();
        assert!(view.last_signal().is_empty());

        view.update(&[
            SatelliteRecord::new(1, 0.0, 10.0, 1, 30.0),
            SatelliteRecord::new(2, 0.0, 10.0, 1, 35.0),
        ]);
        assert_eq!(view.last_signal().len(), 2);

        let frame = view.update(&[SatelliteRecord::new(3, 0.0, 10.0, 1, 25.0)]);
        assert_eq!(view.last_signal(), &frame.signal);
        assert_eq!(view.last_signal().len(), 1);
        assert_eq!(view.last_signal().get(1), None);

        let bars = view.signal_bars();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].height, 0.5);
    }
}
