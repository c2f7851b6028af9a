//! The globe widget façade.
//!
//! [`GlobeWidget`] composes the orbit camera, picking, the focus state
//! machine, and the point registry, and drives them from a single per-frame
//! [`tick`](GlobeWidget::tick). Drawing is delegated to a host
//! [`RenderSurface`].

mod accessors;
mod animation;
pub mod command;
mod input;
mod scene_management;
pub mod surface;

use glam::Vec3;
use web_time::Duration;

pub use self::accessors::AssetKind;
pub use self::command::GlobeCommand;
pub use self::surface::{FrameState, PointFrame, RenderSurface, RingsFrame};
use crate::camera::{OrbitController, Viewport};
use crate::error::GlobeError;
use crate::focus::FocusController;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::picking::Sphere;
use crate::scene::{
    PointRegistry, PointVisual, ResourceResolver, SceneLayer, GLOBE_RADIUS,
};
use crate::util::color::{ColorFn, ColorMode};
use crate::util::frame_timing::FrameTiming;

/// Longest wall-clock step fed to a single tick.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Where point colors come from.
enum ColorSource {
    Mode(ColorMode),
    Custom(ColorFn),
}

impl ColorSource {
    fn color(&self, weight: f32) -> [f32; 3] {
        match self {
            Self::Mode(mode) => mode.color(weight),
            Self::Custom(f) => f(weight),
        }
    }
}

/// Interactive 3D globe of labeled points.
///
/// # Construction
///
/// [`GlobeWidget::new`] takes the host surface and [`Options`]; use
/// [`with_color_fn`](Self::with_color_fn) to color points with a custom
/// function instead of the configured [`ColorMode`].
///
/// # Frame loop
///
/// Call [`animate`](Self::animate) once, then [`frame`](Self::frame) on every
/// display refresh (or [`tick`](Self::tick) with an explicit delta). Input is
/// forwarded via [`handle_input`](Self::handle_input) and
/// [`handle_key`](Self::handle_key).
///
/// # Teardown
///
/// [`teardown`](Self::teardown) (also run on drop) stops the frame loop and
/// cancels every timer.
pub struct GlobeWidget<H: RenderSurface> {
    /// Host collaborator that draws frames and opens resources.
    host: H,
    /// Runtime options.
    options: Options,
    /// Current surface size.
    viewport: Viewport,
    /// Orbit camera with idle spin.
    controller: OrbitController,
    /// The globe sphere picking rays are cast against.
    globe: Sphere,
    /// Registered points.
    registry: PointRegistry,
    /// Static visuals, parallel to the registry.
    visuals: Vec<PointVisual>,
    /// Hover debounce, focus, and highlight animation.
    focus: FocusController,
    /// Raw event → command translation.
    input: InputProcessor,
    /// Weight → color mapping for new points.
    colors: ColorSource,
    /// Click → resource locator.
    resolver: ResourceResolver,
    starfield: bool,
    atmosphere: bool,
    /// Whether the frame loop is running.
    running: bool,
    /// Wall-clock deltas for [`frame`](Self::frame).
    frame_timing: FrameTiming,
}

impl<H: RenderSurface> GlobeWidget<H> {
    /// Attach a widget to `host`.
    ///
    /// Starts idle spin when enabled and shows the configured layers.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::DegenerateViewport`] if the host reports a
    /// zero-sized surface.
    pub fn new(mut host: H, options: Options) -> Result<Self, GlobeError> {
        let (width, height) = host.size();
        let viewport = Viewport::new(width, height)?;
        let globe = Sphere::new(Vec3::ZERO, GLOBE_RADIUS)?;

        let mut controller = OrbitController::new(&options.camera, Vec3::ZERO);
        controller.resize(viewport.aspect());
        controller.set_auto_rotate(options.camera.auto_rotate);

        let focus = FocusController::new(
            &options.focus,
            Duration::from_millis(options.picking.hover_debounce_ms),
        );
        let input = InputProcessor::new(
            &options.camera,
            options.keybindings.clone(),
        );
        let resolver = ResourceResolver::new(
            options.assets.directory.clone(),
            options.assets.fallback_url.clone(),
        )
        .with_journey_dir(options.assets.journey_dir.clone());

        let starfield = options.display.show_starfield;
        let atmosphere = options.display.show_atmosphere;
        host.set_layer_visible(SceneLayer::Starfield, starfield);
        host.set_layer_visible(SceneLayer::Atmosphere, atmosphere);

        log::debug!(
            "globe widget attached: {width}x{height}, auto-rotate {}",
            options.camera.auto_rotate
        );

        Ok(Self {
            host,
            colors: ColorSource::Mode(options.colors.clone()),
            options,
            viewport,
            controller,
            globe,
            registry: PointRegistry::new(),
            visuals: Vec::new(),
            focus,
            input,
            resolver,
            starfield,
            atmosphere,
            running: false,
            frame_timing: FrameTiming::new(MAX_FRAME_DELTA),
        })
    }

    /// Color points added from now on with `color_fn` instead of the
    /// configured [`ColorMode`].
    #[must_use]
    pub fn with_color_fn(
        mut self,
        color_fn: impl Fn(f32) -> [f32; 3] + 'static,
    ) -> Self {
        self.colors = ColorSource::Custom(Box::new(color_fn));
        self
    }

    /// Stop the frame loop and cancel every timer. Idempotent.
    pub fn teardown(&mut self) {
        if self.running {
            log::debug!("globe widget torn down");
        }
        self.running = false;
        self.controller.cancel_timers();
        self.focus.cancel_timers();
    }
}

impl<H: RenderSurface> Drop for GlobeWidget<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{FrameState, RenderSurface};
    use crate::focus::FocusState;
    use crate::scene::SceneLayer;

    /// What a [`RecordingSurface`] saw.
    #[derive(Debug, Default)]
    pub struct SurfaceLog {
        pub frames: usize,
        pub last_focus: Option<FocusState>,
        pub last_scales: Vec<(f32, f32, bool)>,
        pub layers: Vec<(SceneLayer, bool)>,
        pub opened: Vec<String>,
    }

    /// Surface that records calls into a shared log.
    pub struct RecordingSurface {
        pub size: (u32, u32),
        pub log: Rc<RefCell<SurfaceLog>>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> (Self, Rc<RefCell<SurfaceLog>>) {
            let log = Rc::new(RefCell::new(SurfaceLog::default()));
            (
                Self {
                    size: (width, height),
                    log: Rc::clone(&log),
                },
                log,
            )
        }
    }

    impl RenderSurface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            self.size
        }

        fn render(&mut self, frame: &FrameState<'_>) {
            let mut log = self.log.borrow_mut();
            log.frames += 1;
            log.last_focus = Some(frame.focus);
            log.last_scales = frame
                .points
                .iter()
                .map(|p| (p.point_scale, p.label_scale, p.label_visible))
                .collect();
        }

        fn set_layer_visible(&mut self, layer: SceneLayer, visible: bool) {
            self.log.borrow_mut().layers.push((layer, visible));
        }

        fn open_resource(&mut self, locator: &str) {
            self.log.borrow_mut().opened.push(locator.to_owned());
        }
    }
}
