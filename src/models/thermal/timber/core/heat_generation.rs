//! Heat released by burning char.
//!
//! Char releases heat at a rate proportional to its charring progress `α`:
//!
//! ```text
//! before the peak:  α = min(1, dwell / dt2)
//! after the peak:   α = 1 - dwell / dt3
//! ```
//!
//! The release ramps up while the char layer develops and ramps down again
//! during burnout, giving a triangular profile in time. Because the dwell timer
//! is re-armed at the peak, `α` is continuous at 1 across it.

use uom::{
    ConstZero,
    si::{f64::Time, time::second},
};

use crate::support::units::VolumetricHeatRate;

use super::{Phase, PhaseState, ThresholdSchedule};

/// Char-phase combustion heat release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatGeneration {
    char_dwell: Time,
    burnout_dwell: Time,
    combustion_heat: VolumetricHeatRate,
}

impl HeatGeneration {
    #[must_use]
    pub fn from_schedule(schedule: &ThresholdSchedule) -> Self {
        Self {
            char_dwell: schedule.char_dwell(),
            burnout_dwell: schedule.burnout_dwell(),
            combustion_heat: schedule.combustion_heat(),
        }
    }

    /// Returns whether a material in `phase` releases heat.
    #[must_use]
    pub fn is_generating(phase: Phase) -> bool {
        phase == Phase::Char
    }

    /// Returns the charring progress `α` in `[0, 1]`, or 0 outside char.
    #[must_use]
    pub fn progress(&self, state: &PhaseState) -> f64 {
        if !Self::is_generating(state.phase()) {
            return 0.0;
        }

        let dwell = state.dwell_elapsed().get::<second>();
        let alpha = if state.is_past_peak() {
            1.0 - dwell / self.burnout_dwell.get::<second>()
        } else {
            dwell / self.char_dwell.get::<second>()
        };
        alpha.clamp(0.0, 1.0)
    }

    /// Returns the volumetric heat-release rate for `state`.
    #[must_use]
    pub fn rate(&self, state: &PhaseState) -> VolumetricHeatRate {
        if !Self::is_generating(state.phase()) {
            return VolumetricHeatRate::ZERO;
        }
        self.combustion_heat * self.progress(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::thermal::timber::core::test_support::{burning_schedule, seconds},
        support::units::celsius,
    };

    fn advanced(points: &[(f64, f64)]) -> PhaseState {
        let schedule = burning_schedule(1.0e5);
        points.iter().fold(PhaseState::default(), |state, &(t, time)| {
            let mut trial = state;
            trial.advance(celsius(t), seconds(time), &schedule);
            trial.committed()
        })
    }

    #[test]
    fn nothing_outside_char() {
        let heat = HeatGeneration::from_schedule(&burning_schedule(1.0e5));

        for state in [advanced(&[(20.0, 0.0)]), advanced(&[(150.0, 0.0)])] {
            assert!(!HeatGeneration::is_generating(state.phase()));
            assert_eq!(heat.rate(&state), VolumetricHeatRate::ZERO);
        }

        let ash = advanced(&[(900.0, 0.0), (900.0, 700.0)]);
        assert_eq!(ash.phase(), Phase::Ash);
        assert_eq!(heat.rate(&ash), VolumetricHeatRate::ZERO);
    }

    #[test]
    fn ramps_up_while_charring() {
        let heat = HeatGeneration::from_schedule(&burning_schedule(1.0e5));

        let start = advanced(&[(350.0, 0.0)]);
        assert_relative_eq!(heat.progress(&start), 0.0);

        let halfway = advanced(&[(350.0, 0.0), (400.0, 150.0)]);
        assert_relative_eq!(heat.rate(&halfway).value, 5.0e4);

        let saturated = advanced(&[(350.0, 0.0), (400.0, 1000.0)]);
        assert_relative_eq!(heat.progress(&saturated), 1.0);
    }

    #[test]
    fn continuous_at_full_progress() {
        let heat = HeatGeneration::from_schedule(&burning_schedule(1.0e5));

        let at_dt2 = advanced(&[(350.0, 0.0), (500.0, 300.0)]);
        let past_peak = advanced(&[(350.0, 0.0), (500.0, 300.0), (850.0, 300.0)]);

        assert!(past_peak.is_past_peak());
        assert_relative_eq!(heat.progress(&at_dt2), 1.0);
        assert_relative_eq!(heat.progress(&past_peak), 1.0);
        assert_relative_eq!(heat.rate(&at_dt2).value, heat.rate(&past_peak).value);
    }

    #[test]
    fn jumping_past_t3_starts_at_full_burnout_intensity() {
        let heat = HeatGeneration::from_schedule(&burning_schedule(1.0e5));

        // No time is spent in the charring band, so there is no rising leg.
        let jumped = advanced(&[(20.0, 0.0), (900.0, 30.0)]);
        assert!(jumped.is_past_peak());
        assert_eq!(jumped.char_onset(), Some(seconds(30.0)));
        assert_relative_eq!(heat.progress(&jumped), 1.0);

        let later = advanced(&[(20.0, 0.0), (900.0, 30.0), (900.0, 330.0)]);
        assert_relative_eq!(heat.progress(&later), 0.5);
    }

    #[test]
    fn ramps_down_during_burnout() {
        let heat = HeatGeneration::from_schedule(&burning_schedule(1.0e5));

        let quarter = advanced(&[(350.0, 0.0), (850.0, 100.0), (850.0, 250.0)]);
        assert_relative_eq!(heat.progress(&quarter), 0.75);

        let done = advanced(&[(350.0, 0.0), (850.0, 100.0), (850.0, 700.0)]);
        assert_eq!(done.phase(), Phase::Char);
        assert_relative_eq!(heat.rate(&done).value, 0.0);
    }
}
