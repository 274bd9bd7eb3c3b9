//! Animation runner driven by the host's timer loop.

use hyperbola_core::animation::{Animation, AnimationConfig, FRAME_INTERVAL_MS};
use hyperbola_core::curve::SampledCurve;
use js_sys::Float64Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// WASM-exported animation runner. The host calls `tick` once per frame
/// (every `frame_interval_ms` milliseconds) and redraws from the returned
/// render state; closing the window simply stops calling it.
#[wasm_bindgen]
pub struct WasmAnimation {
    pub(crate) inner: Animation,
}

impl WasmAnimation {
    pub(crate) fn from_config(config: &AnimationConfig) -> Result<WasmAnimation, JsValue> {
        let inner =
            Animation::new(config).map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        Ok(WasmAnimation { inner })
    }

    fn select_curve(&self, name: &str) -> Result<&SampledCurve, JsValue> {
        let geometry = self.inner.geometry();
        match name {
            "branch_pos" => Ok(&geometry.branch_pos),
            "branch_neg" => Ok(&geometry.branch_neg),
            "asymptote_pos" => Ok(&geometry.asymptote_pos),
            "asymptote_neg" => Ok(&geometry.asymptote_neg),
            _ => Err(JsValue::from_str("Unknown curve")),
        }
    }
}

#[wasm_bindgen]
impl WasmAnimation {
    /// Creates a runner from a settings object. Undefined or null settings
    /// fall back to the reference configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<WasmAnimation, JsValue> {
        console_error_panic_hook::set_once();

        let config: AnimationConfig = if settings.is_undefined() || settings.is_null() {
            AnimationConfig::default()
        } else {
            from_value(settings)
                .map_err(|e| JsValue::from_str(&format!("Invalid animation settings: {e}")))?
        };
        Self::from_config(&config)
    }

    /// Creates a runner with the reference configuration.
    pub fn with_defaults() -> Result<WasmAnimation, JsValue> {
        console_error_panic_hook::set_once();
        Self::from_config(&AnimationConfig::default())
    }

    /// Renders the frame at the internal counter and advances the counter
    /// one degree, wrapping after a full turn.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        let state = self.inner.tick();
        to_value(&state)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize render state: {e}")))
    }

    /// Renders an explicit frame angle in degrees, leaving the internal
    /// counter untouched.
    pub fn advance(&mut self, frame_degrees: f64) -> Result<JsValue, JsValue> {
        let state = self.inner.advance(frame_degrees);
        to_value(&state)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize render state: {e}")))
    }

    /// Rewinds to frame zero and clears both trails.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Next frame the internal counter will render, in degrees.
    pub fn frame(&self) -> u32 {
        self.inner.frame()
    }

    /// Milliseconds the host timer should wait between ticks.
    pub fn frame_interval_ms(&self) -> u32 {
        FRAME_INTERVAL_MS
    }

    /// The full static geometry as one serialized object.
    pub fn scene_geometry(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.geometry())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize geometry: {e}")))
    }

    /// X coordinates of a static curve ("branch_pos", "branch_neg",
    /// "asymptote_pos", "asymptote_neg") as a typed array.
    pub fn curve_xs(&self, name: &str) -> Result<Float64Array, JsValue> {
        Ok(Float64Array::from(self.select_curve(name)?.xs.as_slice()))
    }

    /// Y coordinates of a static curve, same names as `curve_xs`.
    pub fn curve_ys(&self, name: &str) -> Result<Float64Array, JsValue> {
        Ok(Float64Array::from(self.select_curve(name)?.ys.as_slice()))
    }
}
