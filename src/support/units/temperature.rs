use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin as abs_kelvin},
};

/// Creates a [`ThermodynamicTemperature`] from a value in degrees Celsius.
#[must_use]
pub fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not yield
/// a [`TemperatureInterval`]; this trait provides that operation.
///
/// For background on this distinction:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns `self` shifted by `delta` kelvin (negative values shift down).
    #[must_use]
    fn shifted(self, delta: f64) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn shifted(self, delta: f64) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(self.get::<abs_kelvin>() + delta)
    }
}

/// A closed temperature interval `[lower, upper]`.
///
/// Property curves use bands to blend linearly between the values that hold on
/// either side of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureBand {
    pub lower: ThermodynamicTemperature,
    pub upper: ThermodynamicTemperature,
}

impl TemperatureBand {
    /// Creates a band between two temperatures.
    #[must_use]
    pub fn new(lower: ThermodynamicTemperature, upper: ThermodynamicTemperature) -> Self {
        Self { lower, upper }
    }

    /// Creates a band starting at `lower` and spanning `width` kelvin.
    #[must_use]
    pub fn above(lower: ThermodynamicTemperature, width: f64) -> Self {
        Self::new(lower, lower.shifted(width))
    }

    /// Creates a band ending at `upper` and spanning `width` kelvin.
    #[must_use]
    pub fn below(upper: ThermodynamicTemperature, width: f64) -> Self {
        Self::new(upper.shifted(-width), upper)
    }

    /// Returns the position of `t` within the band, clamped to `[0, 1]`.
    ///
    /// Temperatures below the band map to 0 and above it to 1. A degenerate
    /// band is treated as a step at its upper bound.
    #[must_use]
    pub fn fraction(&self, t: ThermodynamicTemperature) -> f64 {
        let width = self.upper.minus(self.lower).get::<delta_kelvin>();
        if width <= 0.0 {
            return if t < self.upper { 0.0 } else { 1.0 };
        }
        (t.minus(self.lower).get::<delta_kelvin>() / width).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_fahrenheit;

    #[test]
    fn subtract_temperatures() {
        let t1 = celsius(300.0);
        let t2 = celsius(310.0);

        assert_relative_eq!(t2.minus(t1).get::<delta_kelvin>(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(t1.minus(t2).get::<delta_kelvin>(), -10.0, epsilon = 1e-9);

        let t_in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(t_in_f.minus(celsius(25.0)).get::<delta_kelvin>(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn band_fraction_clamps() {
        let band = TemperatureBand::new(celsius(300.0), celsius(400.0));

        assert_relative_eq!(band.fraction(celsius(250.0)), 0.0);
        assert_relative_eq!(band.fraction(celsius(325.0)), 0.25, epsilon = 1e-9);
        assert_relative_eq!(band.fraction(celsius(900.0)), 1.0);
    }

    #[test]
    fn bands_anchored_on_a_bound() {
        let above = TemperatureBand::above(celsius(95.0), 30.0);
        assert_relative_eq!(above.upper.get::<degree_celsius>(), 125.0, epsilon = 1e-9);

        let below = TemperatureBand::below(celsius(800.0), 100.0);
        assert_relative_eq!(below.lower.get::<degree_celsius>(), 700.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_band_is_a_step() {
        let step = TemperatureBand::new(celsius(500.0), celsius(500.0));
        assert_relative_eq!(step.fraction(celsius(499.0)), 0.0);
        assert_relative_eq!(step.fraction(celsius(500.0)), 1.0);
    }
}
