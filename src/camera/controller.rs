use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};
use web_time::Duration;

use crate::camera::core::Camera;
use crate::options::CameraOptions;
use crate::util::timer::Interval;

/// Smoothed yaw/pitch/zoom state of the orbit camera.
///
/// Input only ever writes the `*_target` fields; [`OrbitController::tick`]
/// moves the current values toward them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCameraState {
    /// Desired rotation about the globe's vertical axis (radians).
    pub yaw_target: f32,
    /// Desired elevation (radians), within [-π/2, π/2].
    pub pitch_target: f32,
    /// Current rotation about the vertical axis.
    pub yaw: f32,
    /// Current elevation.
    pub pitch: f32,
    /// Desired distance from the globe center.
    pub zoom_target: f32,
    /// Current distance from the globe center.
    pub zoom: f32,
}

impl OrbitCameraState {
    /// Whether every current value has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.yaw == self.yaw_target
            && self.pitch == self.pitch_target
            && self.zoom == self.zoom_target
    }
}

/// Eye position for an orbit at `zoom` around the origin.
#[must_use]
pub fn orbit_eye(yaw: f32, pitch: f32, zoom: f32) -> Vec3 {
    Vec3::new(
        zoom * yaw.sin() * pitch.cos(),
        zoom * pitch.sin(),
        zoom * yaw.cos() * pitch.cos(),
    )
}

/// Camera up vector tangent to the orbit, so the view stays well defined at
/// the poles.
fn orbit_up(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        -yaw.sin() * pitch.sin(),
        pitch.cos(),
        -yaw.cos() * pitch.sin(),
    )
}

/// Pointer position and targets captured when a drag starts.
#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    pointer: Vec2,
    yaw: f32,
    pitch: f32,
}

/// Orbit camera controller: drag to rotate, wheel/keys to zoom, idle spin.
pub struct OrbitController {
    state: OrbitCameraState,
    center: Vec3,
    drag: Option<DragAnchor>,

    /// Idle auto-rotation timer.
    spin: Interval,
    spin_step: f32,

    min_zoom: f32,
    max_zoom: f32,
    rotate_speed: f32,
    zoom_damp_distance: f32,
    rotation_smoothing: f32,
    zoom_smoothing: f32,

    /// Derived perspective camera, refreshed on every tick.
    pub camera: Camera,
}

impl OrbitController {
    /// Create a controller orbiting `center` with the given options.
    ///
    /// The starting distance is clamped into the zoom range; yaw and pitch
    /// start at zero and swing toward the configured initial targets.
    #[must_use]
    pub fn new(options: &CameraOptions, center: Vec3) -> Self {
        let min_zoom = options.min_zoom.min(options.max_zoom);
        let max_zoom = options.max_zoom.max(options.min_zoom);
        let zoom = options.initial_distance.clamp(min_zoom, max_zoom);
        let state = OrbitCameraState {
            yaw_target: options.initial_yaw,
            pitch_target: options.initial_pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            yaw: 0.0,
            pitch: 0.0,
            zoom_target: zoom,
            zoom,
        };

        let camera = Camera {
            eye: center + orbit_eye(state.yaw, state.pitch, state.zoom),
            target: center,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            state,
            center,
            drag: None,
            spin: Interval::new(Duration::from_millis(
                options.auto_rotate_interval_ms,
            )),
            spin_step: options.auto_rotate_step,
            min_zoom,
            max_zoom,
            rotate_speed: options.rotate_speed,
            zoom_damp_distance: options.zoom_damp_distance.max(f32::EPSILON),
            rotation_smoothing: options.rotation_smoothing.clamp(0.0, 1.0),
            zoom_smoothing: options.zoom_smoothing.clamp(0.0, 1.0),
            camera,
        }
    }

    /// Current smoothed state.
    #[must_use]
    pub fn state(&self) -> &OrbitCameraState {
        &self.state
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Zoom range as `(min, max)`.
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Update the projection aspect ratio after a resize.
    pub fn resize(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    // ── Drag ─────────────────────────────────────────────────────────────

    /// Start a rotate drag at `pointer` (pixels).
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = Some(DragAnchor {
            pointer,
            yaw: self.state.yaw_target,
            pitch: self.state.pitch_target,
        });
    }

    /// Move an active drag to `pointer`. Returns `false` when no drag is
    /// active.
    ///
    /// Sensitivity scales with the current distance so a zoomed-in globe
    /// turns more slowly under the pointer. The horizontal axis is mirrored:
    /// dragging right turns the globe right.
    pub fn drag_to(&mut self, pointer: Vec2) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        if !pointer.is_finite() {
            return true;
        }
        let delta = pointer - anchor.pointer;
        let damp = self.state.zoom / self.zoom_damp_distance;
        self.state.yaw_target = anchor.yaw - delta.x * self.rotate_speed * damp;
        self.state.pitch_target = (anchor.pitch
            + delta.y * self.rotate_speed * damp)
            .clamp(-FRAC_PI_2, FRAC_PI_2);
        true
    }

    /// End the current drag, if any.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ── Zoom / rotate ────────────────────────────────────────────────────

    /// Move the zoom target closer by `delta` (negative moves away).
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.state.zoom_target =
            (self.state.zoom_target - delta).clamp(self.min_zoom, self.max_zoom);
    }

    /// Turn the yaw target by `-delta` radians.
    pub fn rotate(&mut self, delta: f32) {
        if delta.is_finite() {
            self.state.yaw_target -= delta;
        }
    }

    // ── Idle spin ────────────────────────────────────────────────────────

    /// Enable or disable idle auto-rotation. Re-enabling restarts the
    /// interval rather than adding a second one.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if enabled {
            self.spin.start();
        } else {
            self.spin.cancel();
        }
    }

    /// Flip auto-rotation and return the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        let enabled = !self.spin.is_running();
        self.set_auto_rotate(enabled);
        enabled
    }

    /// Whether idle auto-rotation is enabled.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.spin.is_running()
    }

    /// Advance the idle-spin timer. Nudges are dropped while dragging.
    pub fn advance_timers(&mut self, dt: Duration) {
        let fired = self.spin.advance(dt);
        if fired > 0 && !self.is_dragging() {
            self.rotate(self.spin_step * fired as f32);
        }
    }

    // ── Per-frame ────────────────────────────────────────────────────────

    /// Move current values toward their targets and refresh the camera.
    pub fn tick(&mut self) {
        let s = &mut self.state;
        s.yaw += (s.yaw_target - s.yaw) * self.rotation_smoothing;
        s.pitch += (s.pitch_target - s.pitch) * self.rotation_smoothing;
        s.zoom += (s.zoom_target - s.zoom) * self.zoom_smoothing;
        s.pitch = s.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
        s.zoom = s.zoom.clamp(self.min_zoom, self.max_zoom);
        self.update_camera();
    }

    fn update_camera(&mut self) {
        let s = &self.state;
        self.camera.eye = self.center + orbit_eye(s.yaw, s.pitch, s.zoom);
        self.camera.target = self.center;
        self.camera.up = orbit_up(s.yaw, s.pitch);
    }

    /// Stop all timers and any drag.
    pub fn cancel_timers(&mut self) {
        self.spin.cancel();
        self.drag = None;
    }
}
