//! Timber degradation under fire exposure.
//!
//! Wood passes through wet, evaporating, dry, char and ash phases as it
//! heats. A [`PhaseState`] tracks that progression against a
//! [`ThresholdSchedule`], gating char burnout on how long the wood has stayed
//! hot. A [`PropertyModel`] turns the state into density, conductivity and
//! specific heat, and char releases combustion heat through
//! [`HeatGeneration`].

mod diagnostic;
mod error;
mod heat_generation;
mod phase;
mod properties;
mod schedule;
mod state;
mod table;
mod tensor;

#[cfg(test)]
pub(super) mod test_support;

pub use diagnostic::Diagnostic;
pub use error::{ConfigError, PropertyError};
pub use heat_generation::HeatGeneration;
pub use phase::Phase;
pub use properties::{
    ClosedForm, ClosedFormParameters, Properties, PropertyKind, PropertyModel, TableDriven,
    TimberVariant, VariantKind,
};
pub use schedule::{ThresholdSchedule, ThresholdVector};
pub use state::{DwellTimer, PhaseState};
pub use table::{ParameterTable, TableRow};
pub use tensor::ConductivityTensor;
