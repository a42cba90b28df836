//! Phase state machine with dwell-time gating.
//!
//! A [`PhaseState`] is advanced by temperature and simulation time. The
//! material facade always advances a copy of the last committed state, so
//! repeated trial evaluations within one analysis step see the same starting
//! point and never accumulate dwell time twice.

use uom::{
    ConstZero,
    si::f64::{ThermodynamicTemperature, Time},
};

use super::{Phase, ThresholdSchedule};

/// Start and latest mark of a dwell interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellTimer {
    pub start: Time,
    pub mark: Time,
}

impl DwellTimer {
    fn armed(time: Time) -> Self {
        Self {
            start: time,
            mark: time,
        }
    }

    /// Returns the time accumulated since the timer was armed.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.mark - self.start
    }
}

/// Degradation phase and the timers that gate its promotion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseState {
    phase: Phase,
    dwell: Option<DwellTimer>,
    char_onset: Option<Time>,
    past_peak: bool,
}

impl PhaseState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the running dwell timer, if one is armed.
    #[must_use]
    pub fn dwell(&self) -> Option<DwellTimer> {
        self.dwell
    }

    /// Returns the dwell accumulated so far, or zero if no timer is armed.
    #[must_use]
    pub fn dwell_elapsed(&self) -> Time {
        self.dwell.map_or(Time::ZERO, |timer| timer.elapsed())
    }

    /// Returns the simulation time at which char first formed.
    #[must_use]
    pub fn char_onset(&self) -> Option<Time> {
        self.char_onset
    }

    /// Returns whether the dwell timer was re-armed after crossing `T3`.
    #[must_use]
    pub fn is_past_peak(&self) -> bool {
        self.past_peak
    }

    /// Returns this state as it is recorded on commit.
    #[must_use]
    pub fn committed(self) -> Self {
        Self {
            phase: self.phase.settled(),
            ..self
        }
    }

    /// Advances the state for `temperature` at simulation time `time` and
    /// returns the resulting phase.
    ///
    /// Phases never move backwards past `Dry`: once wood has dried or charred
    /// it stays so. Evaporation is decided on temperature alone. Char forms as
    /// soon as `T2` is reached. Ash requires the temperature to stay at or
    /// above `T3` for longer than `dt3`, measured from the first evaluation
    /// above `T3`; falling back below `T3` restarts that clock.
    pub fn advance(
        &mut self,
        temperature: ThermodynamicTemperature,
        time: Time,
        schedule: &ThresholdSchedule,
    ) -> Phase {
        let [t1, t2, t3] = schedule.temperatures();

        if temperature < t1 {
            if self.phase < Phase::Dry {
                self.phase = Phase::Wet;
            }
            self.clear_dwell();
        } else if temperature < t2 {
            if self.phase < Phase::Dry {
                self.phase = if temperature < schedule.evaporation_band().upper {
                    Phase::Evaporation
                } else {
                    Phase::Dry
                };
            }
            self.clear_dwell();
        } else if temperature < t3 {
            match self.phase {
                Phase::Char if self.past_peak => {
                    // Fell back out of burnout: ash accounting starts over.
                    self.past_peak = false;
                    self.dwell = Some(DwellTimer::armed(time));
                }
                Phase::Char => self.mark_dwell(time),
                Phase::Ash => {}
                Phase::Wet | Phase::Evaporation | Phase::Dry => self.enter_char(time),
            }
        } else {
            if self.phase < Phase::Char {
                self.enter_char(time);
            }
            if self.phase == Phase::Char {
                if self.past_peak {
                    self.mark_dwell(time);
                } else {
                    self.dwell = Some(DwellTimer::armed(time));
                    self.past_peak = true;
                }

                if self.dwell_elapsed() > schedule.burnout_dwell() {
                    self.phase = Phase::Ash;
                    self.dwell = None;
                }
            }
        }

        self.phase
    }

    fn enter_char(&mut self, time: Time) {
        self.phase = Phase::Char;
        self.dwell = Some(DwellTimer::armed(time));
        self.char_onset.get_or_insert(time);
        self.past_peak = false;
    }

    fn mark_dwell(&mut self, time: Time) {
        match &mut self.dwell {
            Some(timer) => timer.mark = time,
            None => self.dwell = Some(DwellTimer::armed(time)),
        }
    }

    fn clear_dwell(&mut self) {
        self.dwell = None;
        self.past_peak = false;
    }
}
