use crate::traits::{ParametricCurve, Scalar};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for curve and animation configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Shape parameters must be positive and finite (a = {a}, b = {b}).")]
    InvalidShape { a: f64, b: f64 },
    #[error("Sample range must be finite with max > min (min = {min}, max = {max}).")]
    InvalidRange { min: f64, max: f64 },
    #[error("Sample range needs at least 2 samples, got {0}.")]
    TooFewSamples(usize),
    #[error("Trail capacity must be nonzero.")]
    ZeroTrailCapacity,
}

/// Shape parameters for the standard hyperbola x^2/a^2 - y^2/b^2 = 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperbolaShape {
    pub a: f64,
    pub b: f64,
}

impl Default for HyperbolaShape {
    fn default() -> Self {
        Self { a: 1.0, b: 0.5 }
    }
}

impl HyperbolaShape {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.a.is_finite() || !self.b.is_finite() || self.a <= 0.0 || self.b <= 0.0 {
            return Err(ConfigError::InvalidShape {
                a: self.a,
                b: self.b,
            });
        }
        Ok(())
    }
}

/// Selects one of the two halves of a branch pair: the x >= a branch of the
/// hyperbola (or the positive-slope asymptote), or its mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Positive,
    Negative,
}

/// One branch of the hyperbola: x = ±a·cosh(t), y = b·sinh(t).
#[derive(Debug, Clone, Copy)]
pub struct HyperbolaBranch<T: Scalar> {
    a: T,
    b: T,
    mirror: bool,
}

impl<T: Scalar> HyperbolaBranch<T> {
    pub fn new(shape: &HyperbolaShape, branch: Branch) -> Self {
        Self {
            a: T::from_f64(shape.a).unwrap(),
            b: T::from_f64(shape.b).unwrap(),
            mirror: branch == Branch::Negative,
        }
    }
}

impl<T: Scalar> ParametricCurve<T> for HyperbolaBranch<T> {
    fn eval(&self, t: T) -> (T, T) {
        let x = self.a * t.cosh();
        let y = self.b * t.sinh();
        if self.mirror {
            (-x, y)
        } else {
            (x, y)
        }
    }
}

/// An asymptote of the hyperbola: the line y = ±(b/a)·x, parameterized by x.
#[derive(Debug, Clone, Copy)]
pub struct AsymptoteLine<T: Scalar> {
    slope: T,
}

impl<T: Scalar> AsymptoteLine<T> {
    pub fn new(shape: &HyperbolaShape, branch: Branch) -> Self {
        let slope = match branch {
            Branch::Positive => shape.b / shape.a,
            Branch::Negative => -shape.b / shape.a,
        };
        Self {
            slope: T::from_f64(slope).unwrap(),
        }
    }
}

impl<T: Scalar> ParametricCurve<T> for AsymptoteLine<T> {
    fn eval(&self, t: T) -> (T, T) {
        (t, self.slope * t)
    }
}

/// A uniform sampling grid over a closed parameter interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl SampleRange {
    pub fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { min, max, samples }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.samples < 2 {
            return Err(ConfigError::TooFewSamples(self.samples));
        }
        Ok(())
    }
}

/// An immutable polyline sampled from a parametric curve, stored as
/// parallel coordinate arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn point(&self, idx: usize) -> (f64, f64) {
        (self.xs[idx], self.ys[idx])
    }

    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            xs: vec![0.0; len],
            ys: vec![0.0; len],
        }
    }
}

/// Samples a parametric curve uniformly over the given range.
pub fn sample_curve<T, C>(curve: &C, range: &SampleRange) -> Result<SampledCurve, ConfigError>
where
    T: Scalar,
    C: ParametricCurve<T>,
{
    range.validate()?;
    let denom = (range.samples - 1) as f64;
    let step = (range.max - range.min) / denom;
    let mut xs = Vec::with_capacity(range.samples);
    let mut ys = Vec::with_capacity(range.samples);
    for i in 0..range.samples {
        let t = T::from_f64(range.min + step * i as f64).unwrap();
        let (x, y) = curve.eval(t);
        xs.push(x.to_f64().unwrap());
        ys.push(y.to_f64().unwrap());
    }
    Ok(SampledCurve { xs, ys })
}

/// The static geometry computed once at startup: both hyperbola branches
/// and both asymptotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGeometry {
    pub branch_pos: SampledCurve,
    pub branch_neg: SampledCurve,
    pub asymptote_pos: SampledCurve,
    pub asymptote_neg: SampledCurve,
}

impl SceneGeometry {
    pub fn generate(
        shape: &HyperbolaShape,
        curve_range: &SampleRange,
        asymptote_range: &SampleRange,
    ) -> Result<Self, ConfigError> {
        shape.validate()?;
        let branch_pos = sample_curve(
            &HyperbolaBranch::<f64>::new(shape, Branch::Positive),
            curve_range,
        )?;
        let branch_neg = sample_curve(
            &HyperbolaBranch::<f64>::new(shape, Branch::Negative),
            curve_range,
        )?;
        let asymptote_pos = sample_curve(
            &AsymptoteLine::<f64>::new(shape, Branch::Positive),
            asymptote_range,
        )?;
        let asymptote_neg = sample_curve(
            &AsymptoteLine::<f64>::new(shape, Branch::Negative),
            asymptote_range,
        )?;
        Ok(Self {
            branch_pos,
            branch_neg,
            asymptote_pos,
            asymptote_neg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_curve_range() -> SampleRange {
        SampleRange::new(-2.0, 2.0, 400)
    }

    #[test]
    fn default_shape_matches_reference_constants() {
        let shape = HyperbolaShape::default();
        assert_eq!(shape.a, 1.0);
        assert_eq!(shape.b, 0.5);
    }

    #[test]
    fn branch_samples_satisfy_hyperbola_equation() {
        let shape = HyperbolaShape::default();
        for branch in [Branch::Positive, Branch::Negative] {
            let curve = HyperbolaBranch::<f64>::new(&shape, branch);
            let sampled = sample_curve(&curve, &reference_curve_range()).expect("sampling");
            for i in 0..sampled.len() {
                let (x, y) = sampled.point(i);
                let lhs = x * x / (shape.a * shape.a) - y * y / (shape.b * shape.b);
                assert!(
                    (lhs - 1.0).abs() < 1e-9,
                    "sample {i} violates hyperbola equation: {lhs}"
                );
            }
        }
    }

    #[test]
    fn negative_branch_mirrors_x() {
        let shape = HyperbolaShape::default();
        let pos = HyperbolaBranch::<f64>::new(&shape, Branch::Positive);
        let neg = HyperbolaBranch::<f64>::new(&shape, Branch::Negative);
        let (xp, yp) = pos.eval(0.7);
        let (xn, yn) = neg.eval(0.7);
        assert_eq!(xn, -xp);
        assert_eq!(yn, yp);
    }

    #[test]
    fn branch_vertex_sits_at_plus_minus_a() {
        let shape = HyperbolaShape::default();
        let pos = HyperbolaBranch::<f64>::new(&shape, Branch::Positive);
        let neg = HyperbolaBranch::<f64>::new(&shape, Branch::Negative);
        assert_eq!(pos.eval(0.0), (shape.a, 0.0));
        assert_eq!(neg.eval(0.0), (-shape.a, 0.0));
    }

    #[test]
    fn asymptote_samples_satisfy_slope_exactly() {
        let shape = HyperbolaShape::default();
        let range = SampleRange::new(-5.0, 5.0, 200);
        let slope = shape.b / shape.a;
        let up = sample_curve(&AsymptoteLine::<f64>::new(&shape, Branch::Positive), &range)
            .expect("sampling");
        let down = sample_curve(&AsymptoteLine::<f64>::new(&shape, Branch::Negative), &range)
            .expect("sampling");
        for i in 0..up.len() {
            assert_eq!(up.ys[i], slope * up.xs[i]);
            assert_eq!(down.ys[i], -slope * down.xs[i]);
        }
    }

    #[test]
    fn sample_curve_covers_range_endpoints() {
        let shape = HyperbolaShape::default();
        let line = AsymptoteLine::<f64>::new(&shape, Branch::Positive);
        let range = SampleRange::new(-5.0, 5.0, 200);
        let sampled = sample_curve(&line, &range).expect("sampling");
        assert_eq!(sampled.len(), 200);
        assert!((sampled.xs[0] - range.min).abs() < 1e-12);
        assert!((sampled.xs[199] - range.max).abs() < 1e-12);
    }

    #[test]
    fn sample_curve_supports_other_scalars() {
        let shape = HyperbolaShape::default();
        let curve = HyperbolaBranch::<f32>::new(&shape, Branch::Positive);
        let sampled =
            sample_curve(&curve, &SampleRange::new(-1.0, 1.0, 11)).expect("f32 sampling");
        assert_eq!(sampled.len(), 11);
        assert!((sampled.xs[5] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shape_validation_rejects_nonpositive_parameters() {
        let shape = HyperbolaShape { a: 0.0, b: 0.5 };
        assert_eq!(
            shape.validate(),
            Err(ConfigError::InvalidShape { a: 0.0, b: 0.5 })
        );
        let shape = HyperbolaShape { a: 1.0, b: -1.0 };
        assert!(shape.validate().is_err());
        let shape = HyperbolaShape {
            a: f64::NAN,
            b: 0.5,
        };
        assert!(shape.validate().is_err());
    }

    #[test]
    fn range_validation_rejects_degenerate_ranges() {
        assert_eq!(
            SampleRange::new(2.0, 2.0, 10).validate(),
            Err(ConfigError::InvalidRange { min: 2.0, max: 2.0 })
        );
        assert!(SampleRange::new(f64::NEG_INFINITY, 1.0, 10)
            .validate()
            .is_err());
        assert_eq!(
            SampleRange::new(0.0, 1.0, 1).validate(),
            Err(ConfigError::TooFewSamples(1))
        );
    }

    #[test]
    fn scene_geometry_generates_all_four_curves() {
        let geometry = SceneGeometry::generate(
            &HyperbolaShape::default(),
            &reference_curve_range(),
            &SampleRange::new(-5.0, 5.0, 200),
        )
        .expect("geometry");
        assert_eq!(geometry.branch_pos.len(), 400);
        assert_eq!(geometry.branch_neg.len(), 400);
        assert_eq!(geometry.asymptote_pos.len(), 200);
        assert_eq!(geometry.asymptote_neg.len(), 200);
        // The two branches are mirror images sample by sample.
        for i in 0..geometry.branch_pos.len() {
            assert_eq!(geometry.branch_neg.xs[i], -geometry.branch_pos.xs[i]);
            assert_eq!(geometry.branch_neg.ys[i], geometry.branch_pos.ys[i]);
        }
    }
}
