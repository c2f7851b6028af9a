//! Frame loop for [`GlobeWidget`].

use web_time::Duration;

use super::surface::{FrameState, PointFrame, RingsFrame};
use super::{GlobeWidget, RenderSurface};

impl<H: RenderSurface> GlobeWidget<H> {
    /// Start the frame loop. Calling it again while running is a no-op.
    pub fn animate(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.frame_timing.reset();
        log::debug!("frame loop started");
    }

    /// Whether the frame loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Smoothed frames per second of the wall-clock loop.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Advance by the wall-clock time since the previous frame and render.
    /// Does nothing unless [`animate`](Self::animate) was called.
    ///
    /// Call once per display refresh:
    /// ```ignore
    /// widget.animate();
    /// // on every requestAnimationFrame / redraw:
    /// widget.frame();
    /// ```
    pub fn frame(&mut self) {
        if !self.running {
            return;
        }
        let dt = self.frame_timing.begin_frame();
        self.tick(dt);
    }

    /// Advance every timer and animation by `dt`, then render.
    ///
    /// Order within a tick: idle spin and hover debounce fire, highlight
    /// transitions and the ring pulse advance, a fired hover resolves its
    /// focus (new transitions start from zero), camera smoothing runs, and
    /// finally the host renders.
    pub fn tick(&mut self, dt: Duration) {
        self.controller.advance_timers(dt);
        let hovered = self.focus.poll_debounce(dt);

        self.focus.advance(dt);
        if let Some(pointer) = hovered {
            self.resolve_hover(pointer);
        }

        self.controller.tick();
        self.render();
    }

    fn render(&mut self) {
        let points = self
            .focus
            .highlights()
            .iter()
            .enumerate()
            .map(|(id, h)| {
                let visual = h.visual();
                PointFrame {
                    id,
                    point_scale: visual.point_scale,
                    label_scale: visual.label_scale,
                    label_visible: h.label_visible(),
                }
            })
            .collect();

        let focus_rings = self.focus.rings();
        let rings = focus_rings
            .anchor()
            .and_then(|id| self.visuals.get(id))
            .map(|visual| RingsFrame {
                anchor: visual.marker,
                rings: focus_rings.rings(),
            });

        let frame = FrameState {
            camera: &self.controller.camera,
            view_proj: self.controller.camera.build_matrix(),
            visuals: &self.visuals,
            points,
            focus: self.focus.state(),
            rings,
            starfield: self.starfield,
            atmosphere: self.atmosphere,
        };
        self.host.render(&frame);
    }
}
