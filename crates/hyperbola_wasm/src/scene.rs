//! Startup scene exports, fetched once by the host before the first frame.

use hyperbola_core::animation::FRAME_INTERVAL_MS;
use hyperbola_core::style::SceneStyle;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// The reference scene styling: viewport, legend labels, colors, line
/// styles, marker shapes, and the angle-annotation anchor.
#[wasm_bindgen]
pub fn scene_style() -> Result<JsValue, JsValue> {
    to_value(&SceneStyle::reference())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize scene style: {e}")))
}

/// Milliseconds between frames in the reference rendering loop.
#[wasm_bindgen]
pub fn frame_interval_ms() -> u32 {
    FRAME_INTERVAL_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_matches_reference_loop() {
        assert_eq!(frame_interval_ms(), 50);
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn scene_style_serializes() {
        assert!(scene_style().is_ok(), "expected style to serialize");
    }
}
