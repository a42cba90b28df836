use std::fmt;

/// A thermal-degradation stage of timber.
///
/// Phases are ordered by degradation: `Wet < Evaporation < Dry < Char < Ash`.
/// `Evaporation` is transitional; it only ever appears in a trial state and
/// settles back to `Wet` when committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Wood carrying its initial moisture.
    #[default]
    Wet,
    /// Moisture is being driven off.
    Evaporation,
    /// Moisture-free wood below pyrolysis temperature.
    Dry,
    /// Pyrolysed wood; the only phase that releases combustion heat.
    Char,
    /// Burnt-out residue. Terminal.
    Ash,
}

impl Phase {
    /// Returns the phase to record when a trial state is committed.
    #[must_use]
    pub fn settled(self) -> Self {
        match self {
            Self::Evaporation => Self::Wet,
            phase => phase,
        }
    }

    /// Returns the numeric tag hosts use to report the phase.
    ///
    /// Tags are `0` wet, `1` dry, `2` char and `3` ash. `Evaporation` reports
    /// as wet, matching the phase it settles to.
    #[must_use]
    pub fn tag(self) -> u8 {
        match self.settled() {
            Self::Wet | Self::Evaporation => 0,
            Self::Dry => 1,
            Self::Char => 2,
            Self::Ash => 3,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wet => "wet wood",
            Self::Evaporation => "evaporation",
            Self::Dry => "dry wood",
            Self::Char => "char",
            Self::Ash => "ash",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_by_degradation() {
        assert!(Phase::Wet < Phase::Evaporation);
        assert!(Phase::Evaporation < Phase::Dry);
        assert!(Phase::Dry < Phase::Char);
        assert!(Phase::Char < Phase::Ash);
    }

    #[test]
    fn evaporation_settles_to_wet() {
        assert_eq!(Phase::Evaporation.settled(), Phase::Wet);
        assert_eq!(Phase::Char.settled(), Phase::Char);
        assert_eq!(Phase::Evaporation.tag(), 0);
        assert_eq!(Phase::Ash.tag(), 3);
    }
}
