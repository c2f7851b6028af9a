//! Read-only queries, setters, and asset paths for [`GlobeWidget`].

use std::path::PathBuf;

use super::{GlobeWidget, RenderSurface};
use crate::camera::{Camera, OrbitCameraState, Viewport};
use crate::focus::FocusState;
use crate::options::Options;
use crate::scene::{LabeledPoint, PointVisual, SceneLayer};

/// Assets the host loads from the configured asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    /// Globe surface texture.
    GlobeTexture,
    /// Star box texture.
    Starfield,
    /// Local journey page for a label.
    JourneyPage(String),
}

// ── Queries ──

impl<H: RenderSurface> GlobeWidget<H> {
    /// Current focus.
    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    /// Camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.controller.camera
    }

    /// Smoothed orbit state.
    #[must_use]
    pub fn orbit_state(&self) -> &OrbitCameraState {
        self.controller.state()
    }

    /// Zoom range as `(min, max)`.
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        self.controller.zoom_range()
    }

    /// Current surface size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Registered points, indexed by id.
    #[must_use]
    pub fn points(&self) -> &[LabeledPoint] {
        self.registry.points()
    }

    /// Static point visuals, indexed by id.
    #[must_use]
    pub fn visuals(&self) -> &[PointVisual] {
        &self.visuals
    }

    /// Options the widget was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The host surface.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Resolve an asset under the configured asset directory.
    #[must_use]
    pub fn asset_path(&self, kind: &AssetKind) -> PathBuf {
        let assets = &self.options.assets;
        match kind {
            AssetKind::GlobeTexture => {
                assets.directory.join(&assets.globe_texture)
            }
            AssetKind::Starfield => {
                assets.directory.join(&assets.starfield_texture)
            }
            AssetKind::JourneyPage(label) => self.resolver.journey_page(label),
        }
    }
}

// ── Setters ──

impl<H: RenderSurface> GlobeWidget<H> {
    /// Enable or disable idle auto-rotation.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.controller.set_auto_rotate(enabled);
    }

    /// Whether idle auto-rotation is enabled.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.controller.auto_rotate()
    }

    /// Show or hide the starfield layer.
    pub fn set_starfield_visible(&mut self, visible: bool) {
        if self.starfield != visible {
            self.starfield = visible;
            self.host.set_layer_visible(SceneLayer::Starfield, visible);
        }
    }

    /// Whether the starfield layer is shown.
    #[must_use]
    pub fn starfield_visible(&self) -> bool {
        self.starfield
    }

    /// Show or hide the atmosphere layer.
    pub fn set_atmosphere_visible(&mut self, visible: bool) {
        if self.atmosphere != visible {
            self.atmosphere = visible;
            self.host.set_layer_visible(SceneLayer::Atmosphere, visible);
        }
    }

    /// Whether the atmosphere layer is shown.
    #[must_use]
    pub fn atmosphere_visible(&self) -> bool {
        self.atmosphere
    }
}
