//! Phase-boundary temperatures and dwell thresholds.

use uom::{
    ConstZero,
    si::{
        f64::{ThermodynamicTemperature, Time},
        thermodynamic_temperature::degree_celsius,
        time::second,
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::{TemperatureBand, VolumetricHeatRate, celsius, watts_per_cubic_meter},
};

use super::{ConfigError, ParameterTable};

/// Width of the evaporation band above `T1`, in kelvin.
const EVAPORATION_SPAN: f64 = 30.0;

/// Width of the dry-to-char blend above `T2`, in kelvin.
const CHARRING_SPAN: f64 = 100.0;

/// Width of the char-to-ash blend below `T3`, in kelvin.
const BURNOUT_SPAN: f64 = 100.0;

/// A threshold vector as supplied by a host, with its layout resolved.
///
/// Raw vectors are interpreted by length:
///
/// | len | layout                               | temperatures from |
/// |-----|--------------------------------------|-------------------|
/// | 3   | `[dt1, dt2, dt3]`                    | table             |
/// | 4   | `[dt1, dt2, dt3, q]`                 | table             |
/// | 6   | `[T1, dt1, T2, dt2, T3, dt3]`        | vector            |
///
/// Temperatures are in °C, durations in seconds, and `q` (the combustion
/// heat-release rate at full charring) in W/m³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdVector {
    Dwell([Time; 3]),
    DwellWithCombustion {
        dwell: [Time; 3],
        combustion_heat: VolumetricHeatRate,
    },
    Full {
        temperatures: [ThermodynamicTemperature; 3],
        dwell: [Time; 3],
    },
}

impl TryFrom<&[f64]> for ThresholdVector {
    type Error = ConfigError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let s = |value: f64| Time::new::<second>(value);
        match *values {
            [dt1, dt2, dt3] => Ok(Self::Dwell([s(dt1), s(dt2), s(dt3)])),
            [dt1, dt2, dt3, q] => Ok(Self::DwellWithCombustion {
                dwell: [s(dt1), s(dt2), s(dt3)],
                combustion_heat: watts_per_cubic_meter(q),
            }),
            [t1, dt1, t2, dt2, t3, dt3] => Ok(Self::Full {
                temperatures: [celsius(t1), celsius(t2), celsius(t3)],
                dwell: [s(dt1), s(dt2), s(dt3)],
            }),
            _ => Err(ConfigError::ThresholdLength { len: values.len() }),
        }
    }
}

/// Validated phase-boundary temperatures and dwell thresholds.
///
/// - `T1` ends wet wood, `T2` starts charring, `T3` starts burnout.
/// - `dt1` is the drying dwell, `dt2` the time to full charring intensity,
///   and `dt3` the burnout residence above `T3` required to form ash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSchedule {
    temperatures: [ThermodynamicTemperature; 3],
    dwell: [Constrained<Time, StrictlyPositive>; 3],
    combustion_heat: VolumetricHeatRate,
}

impl ThresholdSchedule {
    /// Creates a schedule with no combustion heat release.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if temperatures are not finite and strictly
    /// increasing, if they sit too close for the transition bands to stay
    /// apart (`T2 - T1 < 30 K` or `T3 - T2 < 200 K`), or if any dwell
    /// duration is not strictly positive.
    pub fn new(
        temperatures: [ThermodynamicTemperature; 3],
        dwell: [Time; 3],
    ) -> Result<Self, ConfigError> {
        let celsius = temperatures.map(|t| t.get::<degree_celsius>());
        let finite = celsius.iter().all(|t| t.is_finite());
        if !finite || celsius[0] >= celsius[1] || celsius[1] >= celsius[2] {
            return Err(ConfigError::ThresholdOrder { celsius });
        }
        if celsius[1] - celsius[0] < EVAPORATION_SPAN
            || celsius[2] - celsius[1] < CHARRING_SPAN + BURNOUT_SPAN
        {
            return Err(ConfigError::ThresholdSpacing { celsius });
        }

        let positive = |index: usize, dt: Time| {
            StrictlyPositive::new(dt).map_err(|source| ConfigError::DwellDuration {
                index,
                value: dt.get::<second>(),
                source,
            })
        };
        let [dt1, dt2, dt3] = dwell;
        let dwell = [positive(1, dt1)?, positive(2, dt2)?, positive(3, dt3)?];

        Ok(Self {
            temperatures,
            dwell,
            combustion_heat: VolumetricHeatRate::ZERO,
        })
    }

    /// Sets the heat-release rate of char at full charring intensity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CombustionHeat`] if the rate is negative or `NaN`.
    pub fn with_combustion_heat(mut self, q: VolumetricHeatRate) -> Result<Self, ConfigError> {
        let q = NonNegative::new(q).map_err(|source| ConfigError::CombustionHeat {
            value: q.value,
            source,
        })?;
        self.combustion_heat = q.into_inner();
        Ok(self)
    }

    /// Resolves a threshold vector, taking temperatures from `table` when the
    /// vector does not carry them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTable`] if temperatures are needed but no
    /// table is given, or any validation error from [`ThresholdSchedule::new`].
    pub fn resolve(
        vector: ThresholdVector,
        table: Option<&ParameterTable>,
    ) -> Result<Self, ConfigError> {
        let from_table = || {
            table
                .map(ParameterTable::thresholds)
                .ok_or(ConfigError::MissingTable)
        };

        match vector {
            ThresholdVector::Dwell(dwell) => Self::new(from_table()?, dwell),
            ThresholdVector::DwellWithCombustion {
                dwell,
                combustion_heat,
            } => Self::new(from_table()?, dwell)?.with_combustion_heat(combustion_heat),
            ThresholdVector::Full {
                temperatures,
                dwell,
            } => Self::new(temperatures, dwell),
        }
    }

    /// Parses and resolves a raw threshold vector.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the vector length is not 3, 4, or 6, or if
    /// resolution fails (see [`ThresholdSchedule::resolve`]).
    pub fn from_raw(values: &[f64], table: Option<&ParameterTable>) -> Result<Self, ConfigError> {
        Self::resolve(ThresholdVector::try_from(values)?, table)
    }

    /// Returns `[T1, T2, T3]`.
    #[must_use]
    pub fn temperatures(&self) -> [ThermodynamicTemperature; 3] {
        self.temperatures
    }

    /// Returns `[dt1, dt2, dt3]`.
    #[must_use]
    pub fn dwell(&self) -> [Time; 3] {
        self.dwell.map(Constrained::into_inner)
    }

    /// Time from char onset to full charring intensity (`dt2`).
    #[must_use]
    pub fn char_dwell(&self) -> Time {
        self.dwell[1].into_inner()
    }

    /// Residence above `T3` required to turn char into ash (`dt3`).
    #[must_use]
    pub fn burnout_dwell(&self) -> Time {
        self.dwell[2].into_inner()
    }

    #[must_use]
    pub fn combustion_heat(&self) -> VolumetricHeatRate {
        self.combustion_heat
    }

    /// Band over which moisture evaporates, `[T1, T1 + 30 K]`.
    #[must_use]
    pub fn evaporation_band(&self) -> TemperatureBand {
        TemperatureBand::above(self.temperatures[0], EVAPORATION_SPAN)
    }

    /// Band over which dry wood turns to char, `[T2, T2 + 100 K]`.
    #[must_use]
    pub fn charring_band(&self) -> TemperatureBand {
        TemperatureBand::above(self.temperatures[1], CHARRING_SPAN)
    }

    /// Band over which char approaches ash, `[T3 - 100 K, T3]`.
    #[must_use]
    pub fn burnout_band(&self) -> TemperatureBand {
        TemperatureBand::below(self.temperatures[2], BURNOUT_SPAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::thermal::timber::core::test_support::scenario_table,
        support::constraint::ConstraintError,
    };

    #[test]
    fn three_entries_take_temperatures_from_table() {
        let table = scenario_table();
        let schedule = ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0], Some(&table)).unwrap();

        assert_eq!(schedule.temperatures(), table.thresholds());
        assert_relative_eq!(schedule.char_dwell().get::<second>(), 300.0);
        assert_relative_eq!(schedule.burnout_dwell().get::<second>(), 600.0);
        assert_eq!(schedule.combustion_heat(), VolumetricHeatRate::ZERO);
    }

    #[test]
    fn four_entries_add_combustion_heat() {
        let table = scenario_table();
        let schedule =
            ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0, 2.5e4], Some(&table)).unwrap();

        assert_relative_eq!(schedule.combustion_heat().value, 2.5e4);
    }

    #[test]
    fn six_entries_carry_their_own_temperatures() {
        let schedule =
            ThresholdSchedule::from_raw(&[100.0, 60.0, 280.0, 300.0, 750.0, 600.0], None).unwrap();

        let [t1, t2, t3] = schedule.temperatures();
        assert_relative_eq!(t1.get::<degree_celsius>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(t2.get::<degree_celsius>(), 280.0, epsilon = 1e-9);
        assert_relative_eq!(t3.get::<degree_celsius>(), 750.0, epsilon = 1e-9);
        assert_relative_eq!(schedule.dwell()[0].get::<second>(), 60.0);
    }

    #[test]
    fn other_lengths_are_rejected() {
        for values in [&[][..], &[1.0, 2.0][..], &[1.0; 5][..], &[1.0; 7][..]] {
            assert_eq!(
                ThresholdSchedule::from_raw(values, Some(&scenario_table())),
                Err(ConfigError::ThresholdLength { len: values.len() })
            );
        }
    }

    #[test]
    fn short_vectors_need_a_table() {
        assert_eq!(
            ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0], None),
            Err(ConfigError::MissingTable)
        );
    }

    #[test]
    fn dwell_must_be_positive() {
        let err = ThresholdSchedule::from_raw(&[60.0, 0.0, 600.0], Some(&scenario_table()));

        assert_eq!(
            err,
            Err(ConfigError::DwellDuration {
                index: 2,
                value: 0.0,
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn temperatures_must_increase() {
        let err = ThresholdSchedule::from_raw(&[300.0, 60.0, 95.0, 300.0, 800.0, 600.0], None);
        assert!(matches!(err, Err(ConfigError::ThresholdOrder { .. })));

        let err = ThresholdSchedule::from_raw(&[95.0, 60.0, f64::NAN, 300.0, 800.0, 600.0], None);
        assert!(matches!(err, Err(ConfigError::ThresholdOrder { .. })));
    }

    #[test]
    fn overlapping_bands_are_rejected() {
        // Burnout would start at 250 °C, inside the charring band.
        let err = ThresholdSchedule::from_raw(&[95.0, 60.0, 300.0, 300.0, 350.0, 600.0], None);
        assert_eq!(
            err,
            Err(ConfigError::ThresholdSpacing {
                celsius: [95.0, 300.0, 350.0]
            })
        );

        // Evaporation would run past T2.
        let err = ThresholdSchedule::from_raw(&[95.0, 60.0, 110.0, 300.0, 800.0, 600.0], None);
        assert!(matches!(err, Err(ConfigError::ThresholdSpacing { .. })));

        let tight = ThresholdSchedule::from_raw(&[95.0, 60.0, 126.0, 300.0, 330.0, 600.0], None);
        assert!(tight.is_ok());
    }

    #[test]
    fn bands_follow_custom_threshold_temperatures() {
        let schedule =
            ThresholdSchedule::from_raw(&[100.0, 60.0, 280.0, 300.0, 750.0, 600.0], None).unwrap();

        let evaporation = schedule.evaporation_band();
        assert_relative_eq!(evaporation.lower.get::<degree_celsius>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(evaporation.upper.get::<degree_celsius>(), 130.0, epsilon = 1e-9);

        let charring = schedule.charring_band();
        assert_relative_eq!(charring.lower.get::<degree_celsius>(), 280.0, epsilon = 1e-9);
        assert_relative_eq!(charring.upper.get::<degree_celsius>(), 380.0, epsilon = 1e-9);

        let burnout = schedule.burnout_band();
        assert_relative_eq!(burnout.lower.get::<degree_celsius>(), 650.0, epsilon = 1e-9);
        assert_relative_eq!(burnout.upper.get::<degree_celsius>(), 750.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_combustion_heat_is_rejected() {
        let err = ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0, -1.0], Some(&scenario_table()));
        assert!(matches!(err, Err(ConfigError::CombustionHeat { .. })));
    }

    #[test]
    fn default_bands_match_table_temperatures() {
        let schedule = ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0], Some(&scenario_table()))
            .unwrap();

        let evaporation = schedule.evaporation_band();
        assert_relative_eq!(evaporation.lower.get::<degree_celsius>(), 95.0, epsilon = 1e-9);
        assert_relative_eq!(evaporation.upper.get::<degree_celsius>(), 125.0, epsilon = 1e-9);

        let charring = schedule.charring_band();
        assert_relative_eq!(charring.upper.get::<degree_celsius>(), 400.0, epsilon = 1e-9);

        let burnout = schedule.burnout_band();
        assert_relative_eq!(burnout.lower.get::<degree_celsius>(), 700.0, epsilon = 1e-9);
        assert_relative_eq!(burnout.upper.get::<degree_celsius>(), 800.0, epsilon = 1e-9);
    }
}
