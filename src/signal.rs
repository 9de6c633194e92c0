use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::SatelliteRecord;

/// Latest signal quality of every satellite that has a usable signal,
/// indexed by satellite identification number.
/// A [SignalSnapshot] is rebuilt from scratch on each status event,
/// it does not retain any history.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalSnapshot {
    inner: BTreeMap<u16, f64>,
}

/// One bar of the signal quality chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalBar {
    /// Satellite identification number, displayed under the bar
    pub satellite_id: u16,
    /// SNR in dB-Hz
    pub snr: f64,
    /// Bar height, as a fraction of the chart full scale.
    /// Strong signals may exceed 1.0.
    pub height: f64,
}

/// Builds a [SignalSnapshot] from a satellite status event.
/// Records with SNR <= 0 carry no usable signal and are omitted.
/// When an identification number is repeated, the last sample wins.
pub fn aggregate(records: &[SatelliteRecord]) -> SignalSnapshot {
    SignalSnapshot {
        inner: records
            .iter()
            .filter(|rec| rec.has_signal())
            .map(|rec| (rec.id, rec.snr))
            .collect(),
    }
}

impl SignalSnapshot {
    /// Number of satellites with usable signal
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// SNR of given satellite, if it has a usable signal
    pub fn get(&self, satellite_id: u16) -> Option<f64> {
        self.inner.get(&satellite_id).copied()
    }

    /// Iterates (satellite id, SNR) by ascending satellite id
    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.inner.iter().map(|(id, snr)| (*id, *snr))
    }

    /// Mean SNR, in dB-Hz
    pub fn mean(&self) -> Option<f64> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.values().sum::<f64>() / self.inner.len() as f64)
        }
    }

    /// (weakest, strongest) SNR, in dB-Hz
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.inner.values().copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(snr) => Some((snr, snr)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// Chart bars, by ascending satellite id, scaled against `reference` (dB-Hz)
    pub fn bars(&self, reference: f64) -> Vec<SignalBar> {
        self.iter()
            .map(|(satellite_id, snr)| SignalBar {
                satellite_id,
                snr,
                height: snr / reference,
            })
            .collect()
    }
}
