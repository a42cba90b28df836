use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while configuring a timber material.
///
/// All of these are fatal: a material is never constructed from an invalid
/// configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The threshold vector is not one of the recognized layouts.
    #[error("threshold vector must have 3, 4, or 6 entries, got {len}")]
    ThresholdLength { len: usize },

    /// Threshold temperatures were not supplied and no table is available.
    #[error("threshold temperatures come from the parameter table, but none was given")]
    MissingTable,

    /// The parameter table does not have one row per settled phase.
    #[error("parameter table must have 4 rows (wet, dry, char, ash), got {rows}")]
    TableShape { rows: usize },

    /// A dwell duration is zero, negative, or not a number.
    #[error("invalid dwell duration dt{index}: {value} s")]
    DwellDuration {
        /// One-based position of the dwell threshold (`dt1`, `dt2`, `dt3`).
        index: usize,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// Threshold temperatures are not finite and strictly increasing.
    #[error("threshold temperatures must be finite and increasing, got {celsius:?} °C")]
    ThresholdOrder { celsius: [f64; 3] },

    /// Threshold temperatures are too close for the evaporation, charring
    /// and burnout bands to stay apart.
    #[error("threshold temperatures {celsius:?} °C leave overlapping transition bands")]
    ThresholdSpacing { celsius: [f64; 3] },

    /// The combustion heat-release rate is negative or not a number.
    #[error("invalid combustion heat-release rate: {value} W/m³")]
    CombustionHeat {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The closed-form reference density is not strictly positive.
    #[error("invalid reference density: {value} kg/m³")]
    ReferenceDensity {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The closed-form moisture fraction is negative or not a number.
    #[error("invalid moisture fraction: {value}")]
    MoistureFraction {
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

/// Errors raised while evaluating material properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The temperature lies outside the range a property curve is defined on.
    #[error("{celsius} °C is outside the {model} domain (up to {limit} °C)")]
    OutOfDomain {
        model: &'static str,
        celsius: f64,
        limit: f64,
    },

    /// The temperature is not a physical absolute temperature.
    #[error("invalid trial temperature: {kelvin} K")]
    InvalidTemperature { kelvin: f64 },
}
