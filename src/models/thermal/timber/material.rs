use std::convert::Infallible;

use twine_core::Observer;
use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermodynamicTemperature, Time},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    clock::SimulationClock,
    units::{VolumetricHeatRate, celsius},
};

use super::core::{
    ConductivityTensor, Diagnostic, HeatGeneration, Phase, PhaseState, Properties, PropertyError,
    PropertyKind, PropertyModel,
};

/// Temperature a material starts at before its first trial.
const AMBIENT_CELSIUS: f64 = 20.0;

/// Committed phase and char onset, as reported to a host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateReport {
    /// `0` wet, `1` dry, `2` char, `3` ash.
    pub phase_tag: u8,
    pub char_onset: Option<Time>,
}

/// A stateful timber material driven by an element-level solver.
///
/// The solver sets a trial temperature, queries properties as often as it
/// needs while iterating, and then either commits or reverts the step. Every
/// trial starts from the last committed state, so repeated trials within a
/// step never accumulate dwell time twice or promote the committed phase
/// early.
///
/// Recoverable problems are reported to the observer `O` as [`Diagnostic`]
/// events. A domain error falls back to the last computed value and an
/// invariant violation returns the offending value as is.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use twine_timber::{
///     models::thermal::timber::{ParameterTable, Phase, TableDriven, TimberMaterial},
///     support::clock::ManualClock,
/// };
/// use uom::si::{f64::{ThermodynamicTemperature, Time}, thermodynamic_temperature::degree_celsius, time::second};
///
/// let table = ParameterTable::from_raw([
///     [95.0, 600.0, 0.3, 2500.0],
///     [300.0, 450.0, 0.2, 1800.0],
///     [800.0, 200.0, 0.4, 1200.0],
///     [f64::NAN, 100.0, 0.5, 1000.0],
/// ]);
/// let model = TableDriven::from_raw(table, &[60.0, 300.0, 600.0]).unwrap();
///
/// let clock = Rc::new(ManualClock::default());
/// let mut material = TimberMaterial::new(model, Rc::clone(&clock));
///
/// clock.set(Time::new::<second>(10.0));
/// material.set_trial_temperature(ThermodynamicTemperature::new::<degree_celsius>(350.0));
/// assert_eq!(material.trial_phase(), Phase::Char);
///
/// material.commit_state();
/// assert_eq!(material.state_report().phase_tag, 2);
/// ```
#[derive(Debug)]
pub struct TimberMaterial<M, C, O = ()> {
    model: M,
    clock: C,
    observer: O,
    committed: PhaseState,
    trial: PhaseState,
    trial_temperature: ThermodynamicTemperature,
    last: Properties,
}

impl<M: PropertyModel, C: SimulationClock> TimberMaterial<M, C> {
    /// Creates a wet material at 20 °C that discards diagnostics.
    #[must_use]
    pub fn new(model: M, clock: C) -> Self {
        Self {
            model,
            clock,
            observer: (),
            committed: PhaseState::default(),
            trial: PhaseState::default(),
            trial_temperature: celsius(AMBIENT_CELSIUS),
            last: Properties::ZERO,
        }
    }
}

impl<M, C, O> TimberMaterial<M, C, O>
where
    M: PropertyModel,
    C: SimulationClock,
    O: Observer<Diagnostic, Infallible>,
{
    /// Replaces the diagnostic observer.
    #[must_use]
    pub fn with_observer<P>(self, observer: P) -> TimberMaterial<M, C, P>
    where
        P: Observer<Diagnostic, Infallible>,
    {
        TimberMaterial {
            model: self.model,
            clock: self.clock,
            observer,
            committed: self.committed,
            trial: self.trial,
            trial_temperature: self.trial_temperature,
            last: self.last,
        }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Sets the trial temperature and re-derives the trial state from the
    /// committed state at the clock's current time.
    ///
    /// A temperature that is not finite or lies below absolute zero is
    /// reported and leaves the trial untouched.
    pub fn set_trial_temperature(&mut self, temperature: ThermodynamicTemperature) {
        let k = temperature.get::<kelvin>();
        if !k.is_finite() || k < 0.0 {
            self.report(PropertyError::InvalidTemperature { kelvin: k }.into());
            return;
        }

        let mut trial = self.committed;
        self.model
            .advance_phase(&mut trial, temperature, self.clock.current_time());
        self.trial = trial;
        self.trial_temperature = temperature;
    }

    #[must_use]
    pub fn trial_temperature(&self) -> ThermodynamicTemperature {
        self.trial_temperature
    }

    #[must_use]
    pub fn trial_phase(&self) -> Phase {
        self.trial.phase()
    }

    #[must_use]
    pub fn committed_phase(&self) -> Phase {
        self.committed.phase()
    }

    /// Returns the conductivity tensor at the trial state.
    pub fn conductivity(&mut self) -> ConductivityTensor {
        let properties = self.evaluate(PropertyKind::Conductivity);
        ConductivityTensor::isotropic(properties.conductivity)
    }

    pub fn density(&mut self) -> MassDensity {
        self.evaluate(PropertyKind::Density).density
    }

    pub fn specific_heat(&mut self) -> SpecificHeatCapacity {
        self.evaluate(PropertyKind::SpecificHeat).specific_heat
    }

    #[must_use]
    pub fn is_generating_heat(&self) -> bool {
        HeatGeneration::is_generating(self.trial.phase())
    }

    /// Returns the volumetric heat-release rate at the trial state.
    #[must_use]
    pub fn heat_generation(&self) -> VolumetricHeatRate {
        self.model.heat_generation(&self.trial)
    }

    /// Accepts the trial state. A transitional evaporation phase is recorded
    /// as wet.
    pub fn commit_state(&mut self) {
        self.committed = self.trial.committed();
    }

    /// Discards the trial state.
    pub fn revert_to_last_commit(&mut self) {
        self.trial = self.committed;
    }

    /// Returns the material to wet wood at 20 °C with no thermal history.
    pub fn revert_to_start(&mut self) {
        self.committed = PhaseState::default();
        self.trial = PhaseState::default();
        self.trial_temperature = celsius(AMBIENT_CELSIUS);
        self.last = Properties::ZERO;
    }

    /// Returns an independent copy carrying this material's committed state.
    ///
    /// The copy's trial is re-derived from the committed state at the current
    /// trial temperature.
    #[must_use]
    pub fn get_copy(&self) -> Self
    where
        M: Clone,
        C: Clone,
        O: Clone,
    {
        let mut trial = self.committed;
        self.model
            .advance_phase(&mut trial, self.trial_temperature, self.clock.current_time());

        Self {
            model: self.model.clone(),
            clock: self.clock.clone(),
            observer: self.observer.clone(),
            committed: self.committed,
            trial,
            trial_temperature: self.trial_temperature,
            last: self.last,
        }
    }

    #[must_use]
    pub fn state_report(&self) -> StateReport {
        StateReport {
            phase_tag: self.committed.phase().tag(),
            char_onset: self.committed.char_onset(),
        }
    }

    /// Evaluates all properties, reporting problems with `kind`.
    fn evaluate(&mut self, kind: PropertyKind) -> Properties {
        let properties = match self
            .model
            .evaluate_properties(&self.trial, self.trial_temperature)
        {
            Ok(properties) => properties,
            Err(error) => {
                self.report(error.into());
                return self.last;
            }
        };
        self.last = properties;

        let value = properties.value(kind);
        if value.is_nan() || value < 0.0 {
            self.report(Diagnostic::InvariantViolation {
                property: kind,
                value,
                phase: self.trial.phase(),
            });
        }
        properties
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if let Some(never) = self.observer.observe(&diagnostic) {
            match never {}
        }
    }
}
