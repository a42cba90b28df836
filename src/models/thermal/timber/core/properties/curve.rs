/// A piecewise-linear curve through fixed `(x, y)` knots.
///
/// Knots must be sorted by strictly increasing `x`. Below the first knot the
/// curve holds its first value; above the last knot it is undefined.
#[derive(Debug, Clone, Copy)]
pub(super) struct Curve(pub(super) &'static [(f64, f64)]);

impl Curve {
    /// Upper bound of the curve's domain.
    pub(super) fn upper(&self) -> f64 {
        self.0.last().map_or(f64::NEG_INFINITY, |&(x, _)| x)
    }

    /// Evaluates the curve at `x`, or `None` if `x` lies above the last knot
    /// or is not a number.
    pub(super) fn at(&self, x: f64) -> Option<f64> {
        let (&(x0, y0), rest) = self.0.split_first()?;
        if x.is_nan() || x > self.upper() {
            return None;
        }
        if x <= x0 {
            return Some(y0);
        }

        let mut prev = (x0, y0);
        for &(x1, y1) in rest {
            if x <= x1 {
                return Some(lerp(prev.1, y1, (x - prev.0) / (x1 - prev.0)));
            }
            prev = (x1, y1);
        }
        None
    }
}

/// Linear interpolation that reproduces `a` at `f = 0` and `b` at `f = 1`
/// exactly.
pub(super) fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a * (1.0 - f) + b * f
}
