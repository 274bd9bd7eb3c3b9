//! The `hyperbola_core` crate provides the math behind the rotating
//! hyperbola animation.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `ParametricCurve`
//!   (curve evaluation seam).
//! - **Curve**: hyperbola branches, asymptote lines, uniform sampling, and
//!   the static scene geometry computed once at startup.
//! - **Rotation**: the per-frame plane rotation about the origin.
//! - **Trail**: bounded FIFO history of marker positions.
//! - **Animation**: the per-frame update producing a `RenderState` for
//!   whatever rendering loop the host provides.

pub mod animation;
pub mod curve;
pub mod rotation;
pub mod style;
pub mod trail;
pub mod traits;
