use thiserror::Error;

use super::{Phase, PropertyError, PropertyKind};

/// A recoverable problem reported while a material is in use.
///
/// Diagnostics never interrupt evaluation. A domain error falls back to the
/// last computed value; an invariant violation returns the offending value
/// unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// A temperature was outside the range the material is defined on.
    #[error("domain range: {0}")]
    DomainRange(#[from] PropertyError),

    /// A property came out negative or not a number.
    #[error("invariant violation: {property} is {value} in {phase}")]
    InvariantViolation {
        property: PropertyKind,
        value: f64,
        phase: Phase,
    },
}
