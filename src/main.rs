//! Headless runner: loads a dataset (and optionally an options preset),
//! drives the widget for a number of frames, and logs what a host would
//! have drawn.

use std::path::Path;

use glam::Vec2;
use terrella::engine::{FrameState, GlobeWidget, RenderSurface};
use terrella::focus::FocusState;
use terrella::input::InputEvent;
use terrella::options::Options;
use terrella::scene::SceneLayer;
use terrella::GlobeError;
use web_time::Duration;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAME: Duration = Duration::from_millis(16);
const DEFAULT_FRAMES: u32 = 120;

/// Surface that logs instead of drawing.
struct LoggingSurface {
    frames: u64,
    last_focus: FocusState,
}

impl RenderSurface for LoggingSurface {
    fn size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn render(&mut self, frame: &FrameState<'_>) {
        self.frames += 1;
        if frame.focus != self.last_focus {
            log::info!("frame {}: focus {:?}", self.frames, frame.focus);
            self.last_focus = frame.focus;
        }
        log::trace!(
            "frame {}: eye {:?}, {} points",
            self.frames,
            frame.camera.eye,
            frame.points.len()
        );
    }

    fn set_layer_visible(&mut self, layer: SceneLayer, visible: bool) {
        log::info!("layer {layer:?} visible: {visible}");
    }

    fn open_resource(&mut self, locator: &str) {
        log::info!("open {locator}");
    }
}

/// Pixel position of a world point under the widget's current camera.
fn screen_of<H: RenderSurface>(
    widget: &GlobeWidget<H>,
    world: glam::Vec3,
) -> Vec2 {
    let ndc = widget.camera().build_matrix().project_point3(world);
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * WIDTH as f32,
        (1.0 - ndc.y) / 2.0 * HEIGHT as f32,
    )
}

fn run(
    dataset: &Path,
    options: Option<&Path>,
    frames: u32,
) -> Result<(), GlobeError> {
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let surface = LoggingSurface {
        frames: 0,
        last_focus: FocusState::Idle,
    };
    let mut widget = GlobeWidget::new(surface, options)?;
    let added = widget.load_data(dataset)?;
    log::info!("loaded {} points from {}", added.len(), dataset.display());

    widget.animate();
    for _ in 0..frames {
        widget.tick(FRAME);
    }

    // Rest the pointer on the first point and click it.
    if let Some(first) = widget.points().first().map(|p| p.position) {
        widget.set_auto_rotate(false);
        let pointer = screen_of(&widget, first);
        widget.handle_input(InputEvent::CursorMoved {
            x: pointer.x,
            y: pointer.y,
        });
        for _ in 0..frames {
            widget.tick(FRAME);
        }
        widget.handle_input(InputEvent::MouseButton {
            button: terrella::input::MouseButton::Left,
            pressed: true,
        });
        widget.handle_input(InputEvent::MouseButton {
            button: terrella::input::MouseButton::Left,
            pressed: false,
        });
    }

    widget.teardown();
    log::info!("done after {} frames", widget.host().frames);
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(dataset) = args.next() else {
        log::error!("Usage: terrella <dataset.json> [options.toml] [frames]");
        std::process::exit(1);
    };
    let options = args.next();
    let frames = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_FRAMES,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("invalid frame count: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(Path::new(&dataset), options.as_deref().map(Path::new), frames) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
