//! WASM bridge for the rotating hyperbola animation core library.
//!
//! The host fetches the static scene once (`scene_style`, the geometry
//! getters on [`animation::WasmAnimation`]) and then drives the runner's
//! `tick` from its timer loop, redrawing from each returned render state.

pub mod animation;
pub mod scene;
