//! Property evaluation strategies.
//!
//! A [`PropertyModel`] answers three questions for a material: how its phase
//! advances, what its properties are in a given state, and how much heat it
//! releases. Two strategies are provided:
//!
//! - [`ClosedForm`]: temperature-only curves with no thermal memory.
//! - [`TableDriven`]: phase-aware table lookup with blended transitions.
//!
//! [`TimberVariant`] wraps both when the strategy is chosen at run time.

mod closed_form;
mod curve;
mod table_driven;

use std::fmt;

use uom::{
    ConstZero,
    si::{
        f64::{
            MassDensity, SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature, Time,
        },
        mass_density::kilogram_per_cubic_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    },
};

use crate::support::units::VolumetricHeatRate;

use super::{
    ConfigError, ParameterTable, Phase, PhaseState, PropertyError, TableRow, ThresholdVector,
};

pub use closed_form::{ClosedForm, ClosedFormParameters};
pub use table_driven::TableDriven;

/// Density, conductivity and specific heat at one state and temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Properties {
    pub density: MassDensity,
    pub conductivity: ThermalConductivity,
    pub specific_heat: SpecificHeatCapacity,
}

impl Properties {
    /// All properties zero.
    pub const ZERO: Self = Self {
        density: MassDensity::ZERO,
        conductivity: ThermalConductivity::ZERO,
        specific_heat: SpecificHeatCapacity::ZERO,
    };

    /// Blends linearly from `a` at `f = 0` to `b` at `f = 1`.
    #[must_use]
    pub fn blend(a: &Self, b: &Self, f: f64) -> Self {
        let g = 1.0 - f;
        Self {
            density: a.density * g + b.density * f,
            conductivity: a.conductivity * g + b.conductivity * f,
            specific_heat: a.specific_heat * g + b.specific_heat * f,
        }
    }

    /// Returns one property as an SI value.
    #[must_use]
    pub fn value(&self, kind: PropertyKind) -> f64 {
        match kind {
            PropertyKind::Density => self.density.get::<kilogram_per_cubic_meter>(),
            PropertyKind::Conductivity => self.conductivity.get::<watt_per_meter_kelvin>(),
            PropertyKind::SpecificHeat => self.specific_heat.get::<joule_per_kilogram_kelvin>(),
        }
    }
}

impl From<&TableRow> for Properties {
    fn from(row: &TableRow) -> Self {
        Self {
            density: row.density,
            conductivity: row.conductivity,
            specific_heat: row.specific_heat,
        }
    }
}

/// Names a single material property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Density,
    Conductivity,
    SpecificHeat,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Density => "density",
            Self::Conductivity => "conductivity",
            Self::SpecificHeat => "specific heat",
        })
    }
}

/// A strategy for evaluating timber properties.
pub trait PropertyModel {
    /// Advances `state` for a trial at `temperature` and simulation `time`,
    /// returning the resulting phase.
    fn advance_phase(
        &self,
        state: &mut PhaseState,
        temperature: ThermodynamicTemperature,
        time: Time,
    ) -> Phase;

    /// Evaluates properties for `state` at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `temperature` is outside the range the
    /// strategy is defined on.
    fn evaluate_properties(
        &self,
        state: &PhaseState,
        temperature: ThermodynamicTemperature,
    ) -> Result<Properties, PropertyError>;

    /// Returns the volumetric heat-release rate for `state`.
    fn heat_generation(&self, state: &PhaseState) -> VolumetricHeatRate;
}

/// Selects a property strategy at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantKind {
    ClosedForm(ClosedFormParameters),
    TableDriven,
}

/// A property strategy chosen at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum TimberVariant {
    ClosedForm(ClosedForm),
    TableDriven(TableDriven),
}

impl TimberVariant {
    /// Builds the strategy selected by `kind`.
    ///
    /// The threshold vector is validated for both strategies, although the
    /// closed-form curves do not use it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the threshold vector is malformed, if the
    /// table-driven strategy is selected without a table, or if parameters
    /// fail validation.
    pub fn from_config(
        kind: VariantKind,
        table: Option<ParameterTable>,
        thresholds: &[f64],
    ) -> Result<Self, ConfigError> {
        match kind {
            VariantKind::ClosedForm(parameters) => {
                ThresholdVector::try_from(thresholds)?;
                Ok(Self::ClosedForm(ClosedForm::new(parameters)?))
            }
            VariantKind::TableDriven => {
                let table = table.ok_or(ConfigError::MissingTable)?;
                Ok(Self::TableDriven(TableDriven::from_raw(table, thresholds)?))
            }
        }
    }
}

impl PropertyModel for TimberVariant {
    fn advance_phase(
        &self,
        state: &mut PhaseState,
        temperature: ThermodynamicTemperature,
        time: Time,
    ) -> Phase {
        match self {
            Self::ClosedForm(model) => model.advance_phase(state, temperature, time),
            Self::TableDriven(model) => model.advance_phase(state, temperature, time),
        }
    }

    fn evaluate_properties(
        &self,
        state: &PhaseState,
        temperature: ThermodynamicTemperature,
    ) -> Result<Properties, PropertyError> {
        match self {
            Self::ClosedForm(model) => model.evaluate_properties(state, temperature),
            Self::TableDriven(model) => model.evaluate_properties(state, temperature),
        }
    }

    fn heat_generation(&self, state: &PhaseState) -> VolumetricHeatRate {
        match self {
            Self::ClosedForm(model) => model.heat_generation(state),
            Self::TableDriven(model) => model.heat_generation(state),
        }
    }
}

impl<M: PropertyModel + ?Sized> PropertyModel for &M {
    fn advance_phase(
        &self,
        state: &mut PhaseState,
        temperature: ThermodynamicTemperature,
        time: Time,
    ) -> Phase {
        (**self).advance_phase(state, temperature, time)
    }

    fn evaluate_properties(
        &self,
        state: &PhaseState,
        temperature: ThermodynamicTemperature,
    ) -> Result<Properties, PropertyError> {
        (**self).evaluate_properties(state, temperature)
    }

    fn heat_generation(&self, state: &PhaseState) -> VolumetricHeatRate {
        (**self).heat_generation(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::thermal::timber::core::test_support::{scenario_table, seconds},
        support::units::celsius,
    };

    #[test]
    fn blend_hits_both_ends_exactly() {
        let table = scenario_table();
        let wet = Properties::from(table.wet());
        let dry = Properties::from(table.dry());

        assert_eq!(Properties::blend(&wet, &dry, 0.0), wet);
        assert_eq!(Properties::blend(&wet, &dry, 1.0), dry);
        assert_relative_eq!(
            Properties::blend(&wet, &dry, 0.25).value(PropertyKind::SpecificHeat),
            2325.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn variant_selects_strategy() {
        let closed = TimberVariant::from_config(
            VariantKind::ClosedForm(ClosedFormParameters::default()),
            None,
            &[60.0, 300.0, 600.0],
        )
        .unwrap();
        assert!(matches!(closed, TimberVariant::ClosedForm(_)));

        let thresholds = [60.0, 300.0, 600.0];
        let table =
            TimberVariant::from_config(VariantKind::TableDriven, Some(scenario_table()), &thresholds)
                .unwrap();
        assert!(matches!(table, TimberVariant::TableDriven(_)));

        let mut state = PhaseState::default();
        assert_eq!(
            table.advance_phase(&mut state, celsius(350.0), seconds(0.0)),
            Phase::Char
        );
        assert_eq!(
            closed.advance_phase(&mut PhaseState::default(), celsius(350.0), seconds(0.0)),
            Phase::Wet
        );
    }

    #[test]
    fn variant_rejects_bad_configuration() {
        assert_eq!(
            TimberVariant::from_config(VariantKind::TableDriven, None, &[60.0, 300.0, 600.0]),
            Err(ConfigError::MissingTable)
        );
        assert_eq!(
            TimberVariant::from_config(
                VariantKind::ClosedForm(ClosedFormParameters::default()),
                None,
                &[1.0; 5],
            ),
            Err(ConfigError::ThresholdLength { len: 5 })
        );
    }
}
