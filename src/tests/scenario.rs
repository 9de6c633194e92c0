use crate::{
    constants::{RAW_CONSTELLATION_GLONASS, RAW_CONSTELLATION_GPS},
    prelude::{Config, Constellation, ConstellationFilter, SatelliteRecord, SkyView},
    projection::project,
    signal::aggregate,
    tests::{init_logger, reference_status},
};

use rstest::*;

const EPSILON: f64 = 1.0E-9;

#[test]
fn zenith_and_horizon() {
    init_logger();

    let mut view = SkyView::new(Config::default().with_radius(100.0)).unwrap();
    view.set_heading(0.0);

    let frame = view.update(&[
        SatelliteRecord::new(1, 0.0, 90.0, RAW_CONSTELLATION_GPS, 40.0),
        SatelliteRecord::new(2, 90.0, 0.0, RAW_CONSTELLATION_GLONASS, -5.0),
    ]);

    assert_eq!(frame.points.len(), 2);

    let zenith = frame.points[0];
    assert_eq!(zenith.satellite_id, 1);
    assert_eq!(zenith.constellation, Constellation::GPS);
    assert!(zenith.x.abs() < EPSILON);
    assert!(zenith.y.abs() < EPSILON);

    let horizon = frame.points[1];
    assert_eq!(horizon.satellite_id, 2);
    assert_eq!(horizon.constellation, Constellation::Glonass);
    assert!((horizon.x - 100.0).abs() < EPSILON);
    assert!(horizon.y.abs() < EPSILON);

    assert_eq!(frame.signal.len(), 1);
    assert_eq!(frame.signal.get(1), Some(40.0));
    assert_eq!(frame.signal.get(2), None);
}

#[test]
fn reference_site_status() {
    init_logger();

    let status = reference_status();

    let mut view = SkyView::new(Config::default()).unwrap();
    view.set_heading(0.7);

    let frame = view.update(&status);

    // SBAS and QZSS are never plotted
    assert_eq!(
        frame
            .points
            .iter()
            .map(|p| p.satellite_id)
            .collect::<Vec<_>>(),
        vec![2, 5, 13, 7, 16, 11, 36, 23, 42]
    );

    for point in frame.points.iter() {
        assert!(
            status.iter().any(|rec| rec.id == point.satellite_id),
            "invented satellite {}",
            point.satellite_id
        );
        assert!(point.distance() <= 100.0 + EPSILON);
    }

    // signal quality does not depend on the sky plot filter
    assert_eq!(
        frame.signal.iter().map(|(id, _)| id).collect::<Vec<_>>(),
        vec![2, 5, 7, 11, 16, 23, 36, 123, 194]
    );
}

#[rstest]
#[case(Constellation::GPS, 3)]
#[case(Constellation::Glonass, 2)]
#[case(Constellation::Galileo, 2)]
#[case(Constellation::BeiDou, 2)]
fn filter_toggling(#[case] hidden: Constellation, #[case] removed: usize) {
    init_logger();

    let status = reference_status();

    let mut filter = ConstellationFilter::default();
    let all = project(&status, &filter, 0.3, 100.0);

    filter.set(hidden, false);
    let filtered = project(&status, &filter, 0.3, 100.0);

    assert_eq!(all.len() - filtered.len(), removed);

    let expected = all
        .iter()
        .filter(|p| p.constellation != hidden)
        .copied()
        .collect::<Vec<_>>();

    assert_eq!(filtered, expected);
}

#[test]
fn hidden_everything() {
    let filter = ConstellationFilter::only(&[]);
    assert!(project(&reference_status(), &filter, 0.0, 100.0).is_empty());
    assert_eq!(aggregate(&reference_status()).len(), 9);
}
