use crate::curve::{ConfigError, HyperbolaShape, SampleRange, SampledCurve, SceneGeometry};
use crate::rotation::FrameRotation;
use crate::trail::Trail;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Milliseconds between frames in the reference rendering loop.
pub const FRAME_INTERVAL_MS: u32 = 50;

/// Degrees the rotation advances per frame.
pub const DEGREES_PER_FRAME: f64 = 1.0;

/// One full revolution, after which the animation repeats.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Points kept behind each rotated marker.
pub const DEFAULT_TRAIL_CAPACITY: usize = 100;

/// Full configuration of the animation. The default reproduces the
/// reference figure: a = 1, b = 0.5, t over [-2, 2] with 400 samples,
/// asymptotes over [-5, 5] with 200 samples, 100-point trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub shape: HyperbolaShape,
    pub curve_range: SampleRange,
    pub asymptote_range: SampleRange,
    pub trail_capacity: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            shape: HyperbolaShape::default(),
            curve_range: SampleRange::new(-2.0, 2.0, 400),
            asymptote_range: SampleRange::new(-5.0, 5.0, 200),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape.validate()?;
        self.curve_range.validate()?;
        self.asymptote_range.validate()?;
        if self.trail_capacity == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        Ok(())
    }
}

/// A point in the plane, serialized across the render boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

/// Everything the host needs to redraw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub angle_degrees: f64,
    pub angle_label: String,
    pub rotated_pos: SampledCurve,
    pub rotated_neg: SampledCurve,
    pub marker_rotated_pos: PlanePoint,
    pub marker_rotated_neg: PlanePoint,
    pub marker_static_pos: PlanePoint,
    pub marker_static_neg: PlanePoint,
    pub trail_pos: SampledCurve,
    pub trail_neg: SampledCurve,
}

/// Sample index for the markers: floor(frame) mod sample_count,
/// non-negative for any frame value.
pub fn marker_index(frame_degrees: f64, sample_count: usize) -> usize {
    (frame_degrees.floor() as i64).rem_euclid(sample_count as i64) as usize
}

/// Animation state: the static scene geometry, one trail per rotated
/// branch, the frame counter, and scratch buffers for the rotated curves.
#[derive(Debug)]
pub struct Animation {
    geometry: SceneGeometry,
    trail_pos: Trail,
    trail_neg: Trail,
    frame: u32,
    scratch_pos: SampledCurve,
    scratch_neg: SampledCurve,
}

impl Animation {
    pub fn new(config: &AnimationConfig) -> Result<Animation> {
        config.validate().context("Invalid animation configuration")?;
        let geometry = SceneGeometry::generate(
            &config.shape,
            &config.curve_range,
            &config.asymptote_range,
        )
        .context("Failed to generate scene geometry")?;
        let samples = geometry.branch_pos.len();
        Ok(Self {
            scratch_pos: SampledCurve::zeroed(samples),
            scratch_neg: SampledCurve::zeroed(samples),
            trail_pos: Trail::new(config.trail_capacity),
            trail_neg: Trail::new(config.trail_capacity),
            frame: 0,
            geometry,
        })
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    /// Next frame the internal ticker will render, in degrees.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Rewinds to frame zero and clears both trails.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.trail_pos.clear();
        self.trail_neg.clear();
    }

    /// Computes the render state for the given frame angle in degrees:
    /// rotates both branches about the origin, picks the marker sample
    /// cycling through the parameter grid, and feeds the rotated marker
    /// positions into the trails.
    pub fn advance(&mut self, frame_degrees: f64) -> RenderState {
        let rotation = FrameRotation::from_degrees(frame_degrees);
        rotation.rotate_into(&self.geometry.branch_pos, &mut self.scratch_pos);
        rotation.rotate_into(&self.geometry.branch_neg, &mut self.scratch_neg);

        let idx = marker_index(frame_degrees, self.geometry.branch_pos.len());
        let (rx_pos, ry_pos) = self.scratch_pos.point(idx);
        let (rx_neg, ry_neg) = self.scratch_neg.point(idx);
        let (sx_pos, sy_pos) = self.geometry.branch_pos.point(idx);
        let (sx_neg, sy_neg) = self.geometry.branch_neg.point(idx);

        self.trail_pos.push(rx_pos, ry_pos);
        self.trail_neg.push(rx_neg, ry_neg);

        RenderState {
            angle_degrees: frame_degrees,
            angle_label: format!("Rotation Angle: {frame_degrees:.1}°"),
            rotated_pos: self.scratch_pos.clone(),
            rotated_neg: self.scratch_neg.clone(),
            marker_rotated_pos: PlanePoint { x: rx_pos, y: ry_pos },
            marker_rotated_neg: PlanePoint { x: rx_neg, y: ry_neg },
            marker_static_pos: PlanePoint { x: sx_pos, y: sy_pos },
            marker_static_neg: PlanePoint { x: sx_neg, y: sy_neg },
            trail_pos: self.trail_pos.to_polyline(),
            trail_neg: self.trail_neg.to_polyline(),
        }
    }

    /// Renders the frame at the internal counter, then advances the counter
    /// by one degree, wrapping at a full turn.
    pub fn tick(&mut self) -> RenderState {
        let state = self.advance(self.frame as f64 * DEGREES_PER_FRAME);
        self.frame = (self.frame + 1) % FULL_TURN_DEGREES as u32;
        state
    }
}
