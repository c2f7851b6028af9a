//! Input dispatch for [`GlobeWidget`].

use glam::Vec2;

use super::{GlobeCommand, GlobeWidget, RenderSurface};
use crate::camera::Viewport;
use crate::input::InputEvent;
use crate::picking::{find_closest, pick};
use crate::scene::PointId;

impl<H: RenderSurface> GlobeWidget<H> {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Hosts forward raw pointer,
    /// wheel, leave/enter, and resize events; the widget turns them into
    /// camera motion, hover debouncing, and clicks.
    ///
    /// # Example
    ///
    /// ```ignore
    /// widget.handle_input(InputEvent::CursorMoved { x, y });
    /// widget.handle_input(InputEvent::Scroll { delta: 120.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Process a key press by its `KeyboardEvent.code` string. Returns
    /// `true` if the key is bound.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: GlobeCommand) {
        match cmd {
            GlobeCommand::Hover { pointer } => {
                self.focus.pointer_moved(pointer);
            }
            GlobeCommand::BeginDrag { pointer } => {
                self.controller.begin_drag(pointer);
            }
            GlobeCommand::Drag { pointer } => {
                let _ = self.controller.drag_to(pointer);
                self.focus.cancel_pending();
                let _ = self.focus.clear();
            }
            GlobeCommand::EndDrag => self.controller.end_drag(),
            GlobeCommand::Click => {
                self.controller.end_drag();
                let _ = self.open_focused();
            }
            GlobeCommand::PointerLeft => {
                self.controller.end_drag();
                self.focus.cancel_pending();
                let _ = self.focus.clear();
            }
            GlobeCommand::Zoom { delta } => self.controller.zoom(delta),
            GlobeCommand::Rotate { delta } => self.controller.rotate(delta),
            GlobeCommand::ToggleAutoRotate => {
                let _ = self.controller.toggle_auto_rotate();
            }
            GlobeCommand::Resize { width, height } => {
                self.resize(width, height);
            }
        }
    }

    /// Update the viewport. A zero-sized surface is ignored and the
    /// previous size kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        match Viewport::new(width, height) {
            Ok(viewport) => {
                self.viewport = viewport;
                self.controller.resize(viewport.aspect());
            }
            Err(e) => log::warn!("ignoring resize: {e}"),
        }
    }

    /// Resolve the point under `pointer`, if any.
    ///
    /// A ray that misses the globe and a hit with no point close enough
    /// both yield `None`.
    #[must_use]
    pub fn point_at(&self, pointer: Vec2) -> Option<PointId> {
        let hit = pick(
            pointer,
            &self.viewport,
            &self.controller.camera,
            &self.globe,
        )?;
        find_closest(
            hit,
            self.globe.center(),
            self.registry.positions(),
            self.options.picking.similarity_threshold,
        )
        .map(|m| m.id)
    }

    /// Debounced hover fired: focus whatever is under `pointer`.
    pub(super) fn resolve_hover(&mut self, pointer: Vec2) {
        if self.controller.is_dragging() {
            return;
        }
        let target = self.point_at(pointer);
        let _ = self.focus.set_focus(target);
    }

    /// Ask the host to open the focused point's resource. Returns the
    /// locator that was opened.
    fn open_focused(&mut self) -> Option<String> {
        let id = self.focus.state().active()?;
        let point = self.registry.get(id)?;
        let locator = self.resolver.resolve(point);
        log::debug!("opening {locator} for point {id}");
        self.host.open_resource(&locator);
        Some(locator)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;
    use crate::engine::test_support::RecordingSurface;
    use crate::focus::{FocusState, TransitionKind};
    use crate::input::MouseButton;
    use crate::options::{CameraOptions, Options};
    use crate::scene::PointRecord;

    const MS: Duration = Duration::from_millis(1);

    /// Widget with a still camera looking down +Z at the globe.
    fn still_widget() -> (
        GlobeWidget<RecordingSurface>,
        std::rc::Rc<std::cell::RefCell<crate::engine::test_support::SurfaceLog>>,
    ) {
        let (surface, log) = RecordingSurface::new(800, 600);
        let options = Options {
            camera: CameraOptions {
                initial_yaw: 0.0,
                initial_pitch: 0.0,
                auto_rotate: false,
                ..CameraOptions::default()
            },
            ..Options::default()
        };
        let mut widget = GlobeWidget::new(surface, options).unwrap();
        let _ = widget.add_data(&[
            PointRecord::new("Quito", 0.0, 90.0, 0.1, None),
            PointRecord::new(
                "Nairobi",
                12.0,
                100.0,
                0.5,
                Some("https://example.org/nairobi".into()),
            ),
            PointRecord::new("Lima", -10.0, 80.0, 0.9, None),
        ]);
        widget.tick(Duration::ZERO);
        (widget, log)
    }

    /// Pixel position of a world point under the widget's camera.
    fn screen_of<H: RenderSurface>(widget: &GlobeWidget<H>, world: Vec3) -> Vec2 {
        let ndc = widget.camera().build_matrix().project_point3(world);
        let vp = widget.viewport();
        Vec2::new(
            (ndc.x + 1.0) / 2.0 * vp.width() as f32,
            (1.0 - ndc.y) / 2.0 * vp.height() as f32,
        )
    }

    fn hover<H: RenderSurface>(widget: &mut GlobeWidget<H>, p: Vec2) {
        widget.handle_input(InputEvent::CursorMoved { x: p.x, y: p.y });
    }

    fn button<H: RenderSurface>(widget: &mut GlobeWidget<H>, pressed: bool) {
        widget.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    #[test]
    fn hover_focuses_point_after_debounce() {
        let (mut widget, log) = still_widget();
        let target = screen_of(&widget, widget.points()[1].position);
        assert_eq!(widget.point_at(target), Some(1));

        hover(&mut widget, target);
        widget.tick(100 * MS);
        assert_eq!(widget.focus_state(), FocusState::Idle);
        widget.tick(100 * MS);
        assert_eq!(widget.focus_state(), FocusState::Focused(1));

        widget.tick(200 * MS);
        let scales = log.borrow().last_scales.clone();
        assert_eq!(scales[1], (2.0, 1.0, true));
        assert_eq!(scales[0], (1.0, 0.0, false));
    }

    #[test]
    fn pointer_off_globe_yields_idle() {
        let (mut widget, _) = still_widget();
        assert_eq!(widget.point_at(Vec2::ZERO), None);
        hover(&mut widget, Vec2::ZERO);
        widget.tick(250 * MS);
        assert_eq!(widget.focus_state(), FocusState::Idle);
    }

    #[test]
    fn leaving_clears_focus_and_pending_hover() {
        let (mut widget, _) = still_widget();
        let target = screen_of(&widget, widget.points()[0].position);
        hover(&mut widget, target);
        widget.tick(200 * MS);
        assert_eq!(widget.focus_state(), FocusState::Focused(0));

        widget.handle_input(InputEvent::CursorLeft);
        assert_eq!(widget.focus_state(), FocusState::Idle);

        hover(&mut widget, target);
        widget.handle_input(InputEvent::CursorLeft);
        widget.tick(300 * MS);
        assert_eq!(widget.focus_state(), FocusState::Idle);
    }

    #[test]
    fn click_on_focused_point_opens_once() {
        let (mut widget, log) = still_widget();
        let target = screen_of(&widget, widget.points()[1].position);
        hover(&mut widget, target);
        widget.tick(200 * MS);

        button(&mut widget, true);
        button(&mut widget, false);
        assert_eq!(log.borrow().opened, vec!["https://example.org/nairobi"]);

        // Release without press does not open again.
        button(&mut widget, false);
        assert_eq!(log.borrow().opened.len(), 1);
    }

    #[test]
    fn jittery_click_still_opens_focused_point() {
        let (mut widget, log) = still_widget();
        let target = screen_of(&widget, widget.points()[1].position);
        hover(&mut widget, target);
        widget.tick(200 * MS);

        button(&mut widget, true);
        hover(&mut widget, target + Vec2::new(0.5, 0.5));
        assert_eq!(widget.focus_state(), FocusState::Focused(1));
        button(&mut widget, false);
        assert_eq!(log.borrow().opened, vec!["https://example.org/nairobi"]);
    }

    #[test]
    fn only_last_hover_before_debounce_is_focused() {
        let (mut widget, log) = still_widget();
        let first = screen_of(&widget, widget.points()[0].position);
        let second = screen_of(&widget, widget.points()[2].position);

        hover(&mut widget, first);
        widget.tick(50 * MS);
        hover(&mut widget, second);
        for _ in 0..8 {
            widget.tick(25 * MS);
            assert!(widget.focus.highlight(0).unwrap().animating().is_none());
            assert_eq!(log.borrow().last_scales[0], (1.0, 0.0, false));
        }

        assert_eq!(widget.focus_state(), FocusState::Focused(2));
        assert_eq!(
            widget.focus.highlight(2).unwrap().animating(),
            Some(TransitionKind::Enter)
        );
        assert!(widget.focus.highlight(1).unwrap().animating().is_none());
    }

    #[test]
    fn third_point_focus_round_trip() {
        let (mut widget, log) = still_widget();
        assert_eq!(widget.points().len(), 3);
        let target = screen_of(&widget, widget.points()[2].position);
        assert_eq!(widget.point_at(target), Some(2));
        assert_eq!(widget.focus_state(), FocusState::Idle);

        hover(&mut widget, target);
        widget.tick(199 * MS);
        assert_eq!(widget.focus_state(), FocusState::Idle);
        widget.tick(MS);
        assert_eq!(widget.focus_state(), FocusState::Focused(2));
        assert_eq!(log.borrow().last_focus, Some(FocusState::Focused(2)));

        widget.handle_input(InputEvent::CursorLeft);
        assert_eq!(widget.focus_state(), FocusState::Idle);
        widget.tick(MS);
        assert_eq!(log.borrow().last_focus, Some(FocusState::Idle));
    }

    #[test]
    fn click_without_focus_opens_nothing() {
        let (mut widget, log) = still_widget();
        hover(&mut widget, Vec2::new(5.0, 5.0));
        button(&mut widget, true);
        button(&mut widget, false);
        assert!(log.borrow().opened.is_empty());
    }

    #[test]
    fn drag_clears_focus_and_rotates() {
        let (mut widget, log) = still_widget();
        let target = screen_of(&widget, widget.points()[1].position);
        hover(&mut widget, target);
        widget.tick(200 * MS);
        assert_eq!(widget.focus_state(), FocusState::Focused(1));

        let yaw_before = widget.orbit_state().yaw_target;
        button(&mut widget, true);
        hover(&mut widget, target + Vec2::new(40.0, 0.0));
        assert_eq!(widget.focus_state(), FocusState::Idle);
        assert!(widget.orbit_state().yaw_target < yaw_before);

        button(&mut widget, false);
        assert!(log.borrow().opened.is_empty());

        // The drag's pending hover was dropped.
        widget.tick(300 * MS);
        assert_eq!(widget.focus_state(), FocusState::Idle);
    }

    #[test]
    fn wheel_and_keys_drive_zoom_and_rotation() {
        let (mut widget, _) = still_widget();
        let (min_zoom, _) = widget.zoom_range();

        hover(&mut widget, Vec2::new(400.0, 300.0));
        widget.handle_input(InputEvent::Scroll { delta: 1000.0 });
        assert_eq!(widget.orbit_state().zoom_target, 700.0);

        assert!(widget.handle_key("ArrowUp"));
        assert!(widget.handle_key("ArrowUp"));
        assert!(widget.handle_key("ArrowUp"));
        assert!(widget.handle_key("ArrowUp"));
        assert_eq!(widget.orbit_state().zoom_target, min_zoom);

        assert!(widget.handle_key("ArrowLeft"));
        assert_eq!(widget.orbit_state().yaw_target, -1.0);
        assert!(!widget.handle_key("KeyZ"));

        assert!(widget.handle_key("KeyR"));
        assert!(widget.auto_rotate());
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let (mut widget, _) = still_widget();
        widget.handle_input(InputEvent::Resized {
            width: 0,
            height: 0,
        });
        assert_eq!(widget.viewport().width(), 800);
        widget.handle_input(InputEvent::Resized {
            width: 400,
            height: 400,
        });
        assert_eq!(widget.viewport().width(), 400);
        assert_eq!(widget.camera().aspect, 1.0);
    }
}
