use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, Z0},
};

/// Volumetric heat generation rate, W/m³ in SI.
pub type VolumetricHeatRate = Quantity<ISQ<N1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`VolumetricHeatRate`] from a value in W/m³.
#[must_use]
pub fn watts_per_cubic_meter(value: f64) -> VolumetricHeatRate {
    VolumetricHeatRate {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
