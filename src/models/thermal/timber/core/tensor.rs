use std::ops::Index;

use uom::{ConstZero, si::f64::ThermalConductivity};

/// A 3×3 thermal conductivity tensor.
///
/// Each evaluation returns a fresh tensor; nothing is shared between
/// materials or between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductivityTensor([[ThermalConductivity; 3]; 3]);

impl ConductivityTensor {
    /// Creates an isotropic tensor with `k` on the diagonal and zeros elsewhere.
    #[must_use]
    pub fn isotropic(k: ThermalConductivity) -> Self {
        let mut components = [[ThermalConductivity::ZERO; 3]; 3];
        for (i, row) in components.iter_mut().enumerate() {
            row[i] = k;
        }
        Self(components)
    }

    #[must_use]
    pub fn diagonal(&self) -> [ThermalConductivity; 3] {
        [self.0[0][0], self.0[1][1], self.0[2][2]]
    }
}

impl Index<(usize, usize)> for ConductivityTensor {
    type Output = ThermalConductivity;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermal_conductivity::watt_per_meter_kelvin;

    #[test]
    fn isotropic_is_diagonal() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.3);
        let tensor = ConductivityTensor::isotropic(k);

        assert_eq!(tensor.diagonal(), [k; 3]);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(tensor[(i, j)], ThermalConductivity::ZERO);
                }
            }
        }
    }
}
