use twine_core::Model;
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::kelvin,
};

use crate::support::units::VolumetricHeatRate;

use super::core::{PhaseState, Properties, PropertyError, PropertyModel};

/// Timber as a pure [`Model`].
///
/// Each call advances the supplied committed state to a trial state and
/// evaluates it. Nothing is stored between calls; the caller owns the state
/// and decides when to commit it with [`PhaseState::committed`].
///
/// Unlike [`TimberMaterial`](super::TimberMaterial), problems are returned as
/// errors rather than reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Timber<M> {
    model: M,
}

impl<M: PropertyModel> Timber<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimberInput {
    pub temperature: ThermodynamicTemperature,
    pub time: Time,
    /// Last committed state.
    pub state: PhaseState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimberOutput {
    /// Trial state after advancing to the input temperature and time.
    pub state: PhaseState,
    pub properties: Properties,
    pub heat_generation: VolumetricHeatRate,
}

impl<M: PropertyModel> Model for Timber<M> {
    type Input = TimberInput;
    type Output = TimberOutput;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let k = input.temperature.get::<kelvin>();
        if !k.is_finite() || k < 0.0 {
            return Err(PropertyError::InvalidTemperature { kelvin: k });
        }

        let mut state = input.state;
        self.model
            .advance_phase(&mut state, input.temperature, input.time);

        Ok(TimberOutput {
            properties: self.model.evaluate_properties(&state, input.temperature)?,
            heat_generation: self.model.heat_generation(&state),
            state,
        })
    }
}
