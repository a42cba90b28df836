//! Phase-aware properties looked up from a [`ParameterTable`].

use uom::si::{
    f64::{SpecificHeatCapacity, ThermodynamicTemperature, Time},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::units::{TemperatureBand, TemperatureDifference, VolumetricHeatRate};

use super::{
    super::{
        ConfigError, HeatGeneration, ParameterTable, Phase, PhaseState, PropertyError,
        ThresholdSchedule,
    },
    Properties, PropertyModel,
};

/// Peak apparent specific heat while moisture evaporates, in J/kg·K.
const LATENT_PEAK: f64 = 13_600.0;

/// Width of each leg of the latent-heat spike, in kelvin.
const LATENT_LEG: f64 = 10.0;

/// Properties driven by the phase state machine and a parameter table.
///
/// Settled phases read their own table row. Within a transition band the
/// neighbouring rows are blended linearly:
///
/// - wet to dry across the evaporation band, with a latent-heat spike in
///   specific heat;
/// - dry to char across the charring band;
/// - char to ash across the burnout band.
///
/// Char that has cooled back below `T2` keeps the char row. Above `T3` the
/// char row holds until the past-peak re-arm, after which the ash row applies.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDriven {
    table: ParameterTable,
    schedule: ThresholdSchedule,
    heat: HeatGeneration,
}

impl TableDriven {
    #[must_use]
    pub fn new(table: ParameterTable, schedule: ThresholdSchedule) -> Self {
        Self {
            heat: HeatGeneration::from_schedule(&schedule),
            table,
            schedule,
        }
    }

    /// Creates a model from a table and a raw 3, 4, or 6 entry threshold vector.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the threshold vector is malformed or fails
    /// validation.
    pub fn from_raw(table: ParameterTable, thresholds: &[f64]) -> Result<Self, ConfigError> {
        let schedule = ThresholdSchedule::from_raw(thresholds, Some(&table))?;
        Ok(Self::new(table, schedule))
    }

    #[must_use]
    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    #[must_use]
    pub fn schedule(&self) -> &ThresholdSchedule {
        &self.schedule
    }

    fn evaporating(&self, t: ThermodynamicTemperature) -> Properties {
        let wet = Properties::from(self.table.wet());
        let dry = Properties::from(self.table.dry());
        let mut blended = Properties::blend(&wet, &dry, self.schedule.evaporation_band().fraction(t));

        let peak = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(LATENT_PEAK);
        let [t1, ..] = self.schedule.temperatures();
        let rise = TemperatureBand::above(t1, LATENT_LEG);
        let fall = TemperatureBand::above(t1.shifted(2.0 * LATENT_LEG), LATENT_LEG);

        blended.specific_heat = if t <= rise.upper {
            mix(wet.specific_heat, peak, rise.fraction(t))
        } else if t < fall.lower {
            peak
        } else {
            mix(peak, dry.specific_heat, fall.fraction(t))
        };
        blended
    }

    fn charred(&self, state: &PhaseState, t: ThermodynamicTemperature) -> Properties {
        let dry = Properties::from(self.table.dry());
        let char = Properties::from(self.table.char());
        let ash = Properties::from(self.table.ash());

        let charring = self.schedule.charring_band();
        let burnout = self.schedule.burnout_band();
        if t >= burnout.upper {
            if state.is_past_peak() { ash } else { char }
        } else if t >= burnout.lower {
            Properties::blend(&char, &ash, burnout.fraction(t))
        } else if t >= charring.lower {
            Properties::blend(&dry, &char, charring.fraction(t))
        } else {
            char
        }
    }
}

fn mix(a: SpecificHeatCapacity, b: SpecificHeatCapacity, f: f64) -> SpecificHeatCapacity {
    a * (1.0 - f) + b * f
}

impl PropertyModel for TableDriven {
    fn advance_phase(
        &self,
        state: &mut PhaseState,
        temperature: ThermodynamicTemperature,
        time: Time,
    ) -> Phase {
        state.advance(temperature, time, &self.schedule)
    }

    fn evaluate_properties(
        &self,
        state: &PhaseState,
        temperature: ThermodynamicTemperature,
    ) -> Result<Properties, PropertyError> {
        Ok(match state.phase() {
            Phase::Evaporation => self.evaporating(temperature),
            Phase::Char => self.charred(state, temperature),
            phase @ (Phase::Wet | Phase::Dry | Phase::Ash) => {
                Properties::from(self.table.row(phase))
            }
        })
    }

    fn heat_generation(&self, state: &PhaseState) -> VolumetricHeatRate {
        self.heat.rate(state)
    }
}
