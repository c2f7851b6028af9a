//! JavaScript bindings (feature `web`).
//!
//! [`WebGlobe`] wraps a [`GlobeWidget`] whose host is a set of JS
//! callbacks: the page draws each frame from a JSON snapshot, toggles its
//! layers, and opens resources.

use js_sys::{Array, Function, JSON};
use serde::Serialize;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};
use web_time::Duration;

use crate::engine::{AssetKind, FrameState, GlobeWidget, RenderSurface};
use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::scene::SceneLayer;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Serializable per-frame snapshot handed to the page's render callback.
#[derive(Serialize)]
struct WebFrame {
    eye: [f32; 3],
    view_proj: [f32; 16],
    focused: Option<usize>,
    /// `[point_scale, label_scale, label_visible]` per point.
    points: Vec<(f32, f32, bool)>,
    /// `[radius, scale]` per ring, empty when no rings are shown.
    rings: Vec<(f32, f32)>,
    starfield: bool,
    atmosphere: bool,
}

impl From<&FrameState<'_>> for WebFrame {
    fn from(frame: &FrameState<'_>) -> Self {
        Self {
            eye: frame.camera.eye.to_array(),
            view_proj: frame.view_proj.to_cols_array(),
            focused: frame.focus.active(),
            points: frame
                .points
                .iter()
                .map(|p| (p.point_scale, p.label_scale, p.label_visible))
                .collect(),
            rings: frame
                .rings
                .map(|r| {
                    r.rings
                        .iter()
                        .map(|s| (s.radius, s.scale))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            starfield: frame.starfield,
            atmosphere: frame.atmosphere,
        }
    }
}

/// Host surface backed by JavaScript callbacks.
struct JsSurface {
    size: (u32, u32),
    on_render: Function,
    on_layer: Function,
    on_open: Function,
}

fn report(result: Result<JsValue, JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("{what} callback failed: {e:?}");
    }
}

impl RenderSurface for JsSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, frame: &FrameState<'_>) {
        let json = match serde_json::to_string(&WebFrame::from(frame)) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("frame serialization failed: {e}");
                return;
            }
        };
        match JSON::parse(&json) {
            Ok(value) => report(self.on_render.call1(&JsValue::NULL, &value), "render"),
            Err(e) => log::warn!("frame parse failed: {e:?}"),
        }
    }

    fn set_layer_visible(&mut self, layer: SceneLayer, visible: bool) {
        let name = match layer {
            SceneLayer::Starfield => "starfield",
            SceneLayer::Atmosphere => "atmosphere",
        };
        report(
            self.on_layer.call2(
                &JsValue::NULL,
                &JsValue::from_str(name),
                &JsValue::from_bool(visible),
            ),
            "layer",
        );
    }

    fn open_resource(&mut self, locator: &str) {
        report(
            self.on_open.call1(&JsValue::NULL, &JsValue::from_str(locator)),
            "open",
        );
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Globe widget exported to JavaScript.
#[wasm_bindgen]
pub struct WebGlobe {
    widget: GlobeWidget<JsSurface>,
}

#[wasm_bindgen]
impl WebGlobe {
    /// Attach to a `width`×`height` surface. `options_toml` may be empty.
    /// `color_fn`, if given, maps a weight to `[r, g, b]`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        options_toml: &str,
        on_render: Function,
        on_layer: Function,
        on_open: Function,
        color_fn: Option<Function>,
    ) -> Result<WebGlobe, JsValue> {
        let options = Options::from_toml(options_toml).map_err(to_js_error)?;
        let surface = JsSurface {
            size: (width, height),
            on_render,
            on_layer,
            on_open,
        };
        let mut widget =
            GlobeWidget::new(surface, options).map_err(to_js_error)?;
        if let Some(f) = color_fn {
            widget = widget.with_color_fn(move |w| js_color(&f, w));
        }
        Ok(Self { widget })
    }

    /// Register points from a JSON dataset. Returns how many were added.
    #[wasm_bindgen(js_name = addData)]
    pub fn add_data(&mut self, json: &str) -> Result<usize, JsValue> {
        self.widget
            .add_data_json(json)
            .map(|added| added.len())
            .map_err(to_js_error)
    }

    /// Start the frame loop.
    pub fn animate(&mut self) {
        self.widget.animate();
    }

    /// Advance by wall-clock time and render; call from
    /// `requestAnimationFrame`.
    pub fn frame(&mut self) {
        self.widget.frame();
    }

    /// Advance by `ms` milliseconds and render.
    pub fn tick(&mut self, ms: f64) {
        if ms.is_finite() && ms >= 0.0 {
            self.widget.tick(Duration::from_secs_f64(ms / 1000.0));
        }
    }

    /// Stop the loop and cancel all timers.
    pub fn teardown(&mut self) {
        self.widget.teardown();
    }

    /// Pointer moved to `(x, y)` pixels.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.widget.handle_input(InputEvent::CursorMoved { x, y });
    }

    /// Primary button pressed or released.
    #[wasm_bindgen(js_name = pointerButton)]
    pub fn pointer_button(&mut self, pressed: bool) {
        self.widget.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    /// Mouse wheel (`wheelDeltaY`, positive zooms in).
    pub fn wheel(&mut self, delta: f32) {
        self.widget.handle_input(InputEvent::Scroll { delta });
    }

    /// Pointer left the surface.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.widget.handle_input(InputEvent::CursorLeft);
    }

    /// Pointer entered the surface.
    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self) {
        self.widget.handle_input(InputEvent::CursorEntered);
    }

    /// Key pressed (`KeyboardEvent.code`). Returns `true` if handled.
    pub fn key(&mut self, code: &str) -> bool {
        self.widget.handle_key(code)
    }

    /// Surface resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.widget.host_mut().size = (width, height);
        }
        self.widget
            .handle_input(InputEvent::Resized { width, height });
    }

    /// Focused point id, if any.
    pub fn focused(&self) -> Option<usize> {
        self.widget.focus_state().active()
    }

    /// Enable or disable idle spin.
    #[wasm_bindgen(js_name = setAutoRotate)]
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.widget.set_auto_rotate(enabled);
    }

    /// Show or hide the starfield.
    #[wasm_bindgen(js_name = setStarfieldVisible)]
    pub fn set_starfield_visible(&mut self, visible: bool) {
        self.widget.set_starfield_visible(visible);
    }

    /// Show or hide the atmosphere.
    #[wasm_bindgen(js_name = setAtmosphereVisible)]
    pub fn set_atmosphere_visible(&mut self, visible: bool) {
        self.widget.set_atmosphere_visible(visible);
    }

    /// Path of `"globe"`, `"starfield"`, or a label's journey page.
    #[wasm_bindgen(js_name = assetPath)]
    pub fn asset_path(&self, kind: &str) -> String {
        let kind = match kind {
            "globe" => AssetKind::GlobeTexture,
            "starfield" => AssetKind::Starfield,
            label => AssetKind::JourneyPage(label.to_owned()),
        };
        self.widget.asset_path(&kind).to_string_lossy().into_owned()
    }
}

/// Call a JS color function, falling back to white on anything unexpected.
fn js_color(f: &Function, weight: f32) -> [f32; 3] {
    let Ok(value) = f.call1(&JsValue::NULL, &JsValue::from_f64(f64::from(weight)))
    else {
        return [1.0; 3];
    };
    let rgb = Array::from(&value);
    let channel = |i: u32| rgb.get(i).as_f64().map_or(1.0, |c| c as f32);
    [channel(0), channel(1), channel(2)]
}
