//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, density,
//! conductivity, heat capacity, time). This module provides extensions that are
//! useful for material modeling but aren't included in [`uom`].
//!
//! ## Volumetric heat rates
//!
//! [`VolumetricHeatRate`] (W/m³) is the unit of an internal heat source, such as
//! the heat released by burning char.
//!
//! ## Temperature differences and bands
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method for subtracting one absolute temperature from another, and
//! [`TemperatureBand`] locates a temperature within a closed interval, which is
//! how property curves blend between band edges:
//!
//! ```
//! use twine_timber::support::units::{TemperatureBand, celsius};
//!
//! let band = TemperatureBand::above(celsius(300.0), 100.0);
//! assert!((band.fraction(celsius(350.0)) - 0.5).abs() < 1e-12);
//! ```

mod quantities;
mod temperature;

pub use quantities::{VolumetricHeatRate, watts_per_cubic_meter};
pub use temperature::{TemperatureBand, TemperatureDifference, celsius};
