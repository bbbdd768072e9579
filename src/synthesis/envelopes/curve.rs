//! Interpolation curves for control wave segments.
//!
//! Curves define how a value travels between two points over time. They are
//! used to shape the segments of a [`ControlWave`](super::ControlWave).

/// Two-point interpolation contract.
///
/// Given a position `x` and a window `[x1, x2]` with endpoint values `y1` and
/// `y2`, returns the value at `x`.
pub trait Interpolation {
    fn at(&self, x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64;
}

/// Interpolation curve types for control segments.
///
/// All non-linear curves map a normalized position [0, 1] to a normalized
/// progress [0, 1], which is then scaled onto the segment's value range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// Linear interpolation (constant rate of change)
    #[default]
    Linear,

    /// Exponential curve (slow start, fast finish)
    ///
    /// The parameter controls steepness:
    /// - `2.0` = squared curve
    /// - `3.0` = cubed curve
    Exponential(f64),

    /// Logarithmic curve (fast start, slow finish)
    ///
    /// Inverse of exponential. The parameter controls steepness.
    Logarithmic(f64),

    /// Smooth S-curve with ease-in and ease-out
    SCurve,
}

impl Curve {
    /// Apply the curve to a normalized value.
    ///
    /// # Arguments
    ///
    /// * `t` - Input value, clamped to [0, 1]
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegraph::Curve;
    ///
    /// assert_eq!(Curve::Linear.apply(0.5), 0.5);
    /// assert_eq!(Curve::Exponential(2.0).apply(0.5), 0.25);
    /// ```
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::Exponential(exp) => t.powf(*exp),
            Curve::Logarithmic(exp) => 1.0 - (1.0 - t).powf(*exp),
            // smoothstep
            Curve::SCurve => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl Interpolation for Curve {
    /// Linear: `(x - x1) / |x2 - x1| · (y2 - y1) + y1`.
    ///
    /// The other curves shape the same normalized progress. A zero-width
    /// window jumps straight to `y2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegraph::{Curve, Interpolation};
    ///
    /// assert_eq!(Curve::Linear.at(1.5, 1.0, 2.0, 0.0, 0.8), 0.4);
    /// ```
    fn at(&self, x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
        let width = (x2 - x1).abs();
        if width == 0.0 {
            return y2;
        }

        let progress = (x - x1) / width;
        match self {
            Curve::Linear => progress * (y2 - y1) + y1,
            curve => curve.apply(progress) * (y2 - y1) + y1,
        }
    }
}

impl<F: Fn(f64, f64, f64, f64, f64) -> f64> Interpolation for F {
    fn at(&self, x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
        self(x, x1, x2, y1, y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear_curve() {
        let curve = Curve::Linear;
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(0.5), 0.5);
        assert_eq!(curve.apply(1.0), 1.0);
    }

    #[test]
    fn test_exponential_curve() {
        let curve = Curve::Exponential(2.0);
        assert_eq!(curve.apply(0.5), 0.25);
        assert_eq!(Curve::Exponential(3.0).apply(0.5), 0.125);
    }

    #[test]
    fn test_logarithmic_curve() {
        let curve = Curve::Logarithmic(2.0);
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(0.5), 0.75);
        assert_eq!(curve.apply(1.0), 1.0);
    }

    #[test]
    fn test_scurve() {
        let curve = Curve::SCurve;
        assert_eq!(curve.apply(0.5), 0.5);
        assert!(curve.apply(0.25) < 0.25);
        assert!(curve.apply(0.75) > 0.75);
    }

    #[test]
    fn test_linear_interpolation() {
        let linear = Curve::Linear;
        assert_eq!(linear.at(0.0, 0.0, 1.0, 0.0, 1.0), 0.0);
        assert_eq!(linear.at(1.0, 1.0, 2.0, 1.0, 0.3), 1.0);
        assert!(approx_eq(linear.at(2.5, 2.0, 3.0, 0.3, 0.7), 0.5));
        // descending values
        assert!(approx_eq(linear.at(0.25, 0.0, 1.0, 1.0, 0.0), 0.75));
    }

    #[test]
    fn test_linear_interpolation_reversed_window() {
        // |x2 - x1| keeps the slope sign-safe
        assert!(approx_eq(Curve::Linear.at(1.5, 2.0, 1.0, 0.0, 1.0), -0.5));
    }

    #[test]
    fn test_zero_width_window_jumps() {
        assert_eq!(Curve::Linear.at(1.0, 1.0, 1.0, 0.2, 0.9), 0.9);
        assert_eq!(Curve::SCurve.at(1.0, 1.0, 1.0, 0.2, 0.9), 0.9);
    }

    #[test]
    fn test_shaped_interpolation() {
        let exp = Curve::Exponential(2.0);
        assert!(approx_eq(exp.at(0.5, 0.0, 1.0, 0.0, 100.0), 25.0));

        let log = Curve::Logarithmic(2.0);
        assert!(approx_eq(log.at(0.5, 0.0, 1.0, 0.0, 100.0), 75.0));
    }

    #[test]
    fn test_closure_interpolation() {
        let step = |_x: f64, _x1: f64, _x2: f64, y1: f64, _y2: f64| y1;
        assert_eq!(step.at(0.7, 0.0, 1.0, 0.4, 1.0), 0.4);
    }

    #[test]
    fn test_default() {
        assert_eq!(Curve::default(), Curve::Linear);
    }
}
