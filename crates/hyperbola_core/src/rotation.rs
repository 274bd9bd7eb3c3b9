use crate::curve::SampledCurve;
use nalgebra::{Point2, Rotation2};

/// A plane rotation about the origin, built once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameRotation {
    rotation: Rotation2<f64>,
}

impl FrameRotation {
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    pub fn from_radians(radians: f64) -> Self {
        Self {
            rotation: Rotation2::new(radians),
        }
    }

    /// Rotates a single point about the origin.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let rotated = self.rotation * Point2::new(x, y);
        (rotated.x, rotated.y)
    }

    /// Rotates every point of `src` into `dst`, resizing `dst` to match.
    /// The destination buffer is meant to be reused across frames.
    pub fn rotate_into(&self, src: &SampledCurve, dst: &mut SampledCurve) {
        let matrix = self.rotation.matrix();
        let (cos, sin) = (matrix[(0, 0)], matrix[(1, 0)]);
        dst.xs.resize(src.len(), 0.0);
        dst.ys.resize(src.len(), 0.0);
        for i in 0..src.len() {
            let x = src.xs[i];
            let y = src.ys[i];
            dst.xs[i] = cos * x - sin * y;
            dst.ys[i] = sin * x + cos * y;
        }
    }
}
