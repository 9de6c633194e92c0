use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Constellation;

/// [ConstellationFilter] tells which [Constellation]s should appear on the
/// sky plot. Every known [Constellation] is visible by default,
/// [Constellation::Unknown] never is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstellationFilter {
    visible: BTreeMap<Constellation, bool>,
}

impl Default for ConstellationFilter {
    fn default() -> Self {
        Self::all_visible()
    }
}

impl ConstellationFilter {
    /// Builds a [ConstellationFilter] where all known constellations are visible
    pub fn all_visible() -> Self {
        Self {
            visible: Constellation::KNOWN.iter().map(|c| (*c, true)).collect(),
        }
    }

    /// Builds a [ConstellationFilter] that only lets given [Constellation]s through.
    pub fn only(constellations: &[Constellation]) -> Self {
        let mut s = Self::all_visible();
        for (constellation, flag) in s.visible.iter_mut() {
            *flag = constellations.contains(constellation);
        }
        s
    }

    /// Returns true if this [Constellation] should be plotted
    pub fn is_visible(&self, constellation: Constellation) -> bool {
        self.visible.get(&constellation).copied().unwrap_or(false)
    }

    /// Updates the visibility of a single [Constellation].
    /// Has no effect on [Constellation::Unknown], which is always hidden.
    pub fn set(&mut self, constellation: Constellation, visible: bool) {
        if let Some(flag) = self.visible.get_mut(&constellation) {
            *flag = visible;
        }
    }

    /// Flips the visibility of a single [Constellation] and returns the new state.
    pub fn toggle(&mut self, constellation: Constellation) -> bool {
        match self.visible.get_mut(&constellation) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            },
            None => false,
        }
    }

    /// Makes all known [Constellation]s visible again
    pub fn show_all(&mut self) {
        self.visible.values_mut().for_each(|flag| *flag = true);
    }

    /// Iterates visible [Constellation]s, in filter order
    pub fn visible(&self) -> impl Iterator<Item = Constellation> + '_ {
        self.visible
            .iter()
            .filter_map(|(constellation, flag)| if *flag { Some(*constellation) } else { None })
    }
}
