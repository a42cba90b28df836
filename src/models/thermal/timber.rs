//! Timber under fire exposure.
//!
//! Wood degrades through wet, evaporating, dry, char and ash phases as it
//! heats, and its density, conductivity and specific heat change with it.
//! Char also releases combustion heat while it burns.
//!
//! Two property strategies are available behind [`PropertyModel`]:
//!
//! - [`TableDriven`] follows a phase state machine over a [`ParameterTable`],
//!   gating char burnout on how long the wood stays above `T3`.
//! - [`ClosedForm`] uses fixed temperature-dependent curves and keeps no
//!   thermal history.
//!
//! [`TimberVariant`] selects between them at run time.
//!
//! # Adapters
//!
//! - [`TimberMaterial`] is a stateful material for element-level solvers. It
//!   separates trial and committed state so a solver can evaluate a step many
//!   times before accepting it, and reports recoverable problems to a
//!   [`twine_core::Observer`] of [`Diagnostic`] events.
//! - [`Timber`] is a pure [`twine_core::Model`] from committed state,
//!   temperature and time to trial state and properties.

pub(crate) mod core;
mod material;
mod model;

pub use self::core::{
    ClosedForm, ClosedFormParameters, ConductivityTensor, ConfigError, Diagnostic, DwellTimer,
    HeatGeneration, ParameterTable, Phase, PhaseState, Properties, PropertyError, PropertyKind,
    PropertyModel, TableDriven, TableRow, ThresholdSchedule, ThresholdVector, TimberVariant,
    VariantKind,
};
pub use material::{StateReport, TimberMaterial};
pub use model::{Timber, TimberInput, TimberOutput};
