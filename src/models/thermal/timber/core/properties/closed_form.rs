//! Temperature-only property curves for softwood.

use uom::{
    ConstZero,
    si::{
        f64::{
            MassDensity, SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature, Time,
        },
        mass_density::kilogram_per_cubic_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::VolumetricHeatRate,
};

use super::{
    super::{ConfigError, Phase, PhaseState, PropertyError},
    Properties, PropertyModel,
    curve::{Curve, lerp},
};

/// Conductivity in W/m·K against temperature in °C.
const CONDUCTIVITY: Curve = Curve(&[
    (20.0, 0.12),
    (200.0, 0.15),
    (350.0, 0.07),
    (500.0, 0.09),
    (800.0, 0.35),
    (1200.0, 1.5),
]);

/// Density ratio to the dry reference density above 200 °C.
const DENSITY_RATIO: Curve = Curve(&[
    (200.0, 1.0),
    (250.0, 0.93),
    (300.0, 0.76),
    (350.0, 0.52),
    (400.0, 0.38),
    (600.0, 0.28),
    (800.0, 0.26),
    (1200.0, 0.0),
]);

/// Specific heat in J/kg·K, including the latent-heat peak around 100 °C.
const SPECIFIC_HEAT: Curve = Curve(&[
    (20.0, 1530.0),
    (99.0, 1770.0),
    (100.0, 13600.0),
    (120.0, 13500.0),
    (129.0, 2120.0),
    (200.0, 2000.0),
    (250.0, 1620.0),
    (300.0, 710.0),
    (350.0, 850.0),
    (400.0, 1000.0),
    (600.0, 1400.0),
    (800.0, 1650.0),
    (1200.0, 1650.0),
]);

/// Moist wood keeps its full wet density up to this temperature, in °C.
const MOIST_LIMIT: f64 = 100.0;

/// Moisture is gone and the density ratio reaches 1 here, in °C.
const DRY_LIMIT: f64 = 200.0;

const DOMAIN_LIMIT: f64 = 1200.0;

/// Parameters of the closed-form curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedFormParameters {
    /// Dry density the density ratio is applied to.
    pub reference_density: MassDensity,
    /// Moisture content as a fraction of dry mass.
    pub moisture: f64,
}

impl Default for ClosedFormParameters {
    fn default() -> Self {
        Self {
            reference_density: MassDensity::new::<kilogram_per_cubic_meter>(450.0),
            moisture: 0.12,
        }
    }
}

impl ClosedFormParameters {
    #[must_use]
    pub fn with_reference_density(mut self, density: MassDensity) -> Self {
        self.reference_density = density;
        self
    }

    #[must_use]
    pub fn with_moisture(mut self, moisture: f64) -> Self {
        self.moisture = moisture;
        self
    }
}

/// Property curves that depend on temperature alone.
///
/// The closed-form model has no thermal memory: its phase stays
/// [`Phase::Wet`] and it never releases heat. Curves are defined up to
/// 1200 °C and hold their 20 °C values below that.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClosedForm {
    parameters: ClosedFormParameters,
}

impl ClosedForm {
    /// Creates a closed-form model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the reference density is not strictly
    /// positive or the moisture fraction is negative.
    pub fn new(parameters: ClosedFormParameters) -> Result<Self, ConfigError> {
        let rho = parameters.reference_density.get::<kilogram_per_cubic_meter>();
        StrictlyPositive::check(&rho)
            .map_err(|source| ConfigError::ReferenceDensity { value: rho, source })?;
        NonNegative::check(&parameters.moisture).map_err(|source| {
            ConfigError::MoistureFraction {
                value: parameters.moisture,
                source,
            }
        })?;

        Ok(Self { parameters })
    }

    #[must_use]
    pub fn parameters(&self) -> &ClosedFormParameters {
        &self.parameters
    }

    fn density_ratio(&self, celsius: f64) -> Option<f64> {
        let wet = 1.0 + self.parameters.moisture;
        if celsius <= MOIST_LIMIT {
            Some(wet)
        } else if celsius <= DRY_LIMIT {
            Some(lerp(
                wet,
                1.0,
                (celsius - MOIST_LIMIT) / (DRY_LIMIT - MOIST_LIMIT),
            ))
        } else {
            DENSITY_RATIO.at(celsius)
        }
    }
}

impl PropertyModel for ClosedForm {
    fn advance_phase(
        &self,
        state: &mut PhaseState,
        _temperature: ThermodynamicTemperature,
        _time: Time,
    ) -> Phase {
        state.phase()
    }

    fn evaluate_properties(
        &self,
        _state: &PhaseState,
        temperature: ThermodynamicTemperature,
    ) -> Result<Properties, PropertyError> {
        let celsius = temperature.get::<degree_celsius>();
        let out_of_domain = PropertyError::OutOfDomain {
            model: "closed-form",
            celsius,
            limit: DOMAIN_LIMIT,
        };
        if !celsius.is_finite() {
            return Err(out_of_domain);
        }

        let (Some(k), Some(ratio), Some(cp)) = (
            CONDUCTIVITY.at(celsius),
            self.density_ratio(celsius),
            SPECIFIC_HEAT.at(celsius),
        ) else {
            return Err(out_of_domain);
        };

        Ok(Properties {
            density: self.parameters.reference_density * ratio,
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(k),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
        })
    }

    fn heat_generation(&self, _state: &PhaseState) -> VolumetricHeatRate {
        VolumetricHeatRate::ZERO
    }
}
