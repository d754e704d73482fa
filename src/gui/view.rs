use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3};

use super::overlay::OverlayWidgets;
use super::panel::ControlPanel;
use super::renderer::OrbitPathRenderer;
use super::scene::SceneNodes;
use super::state::{ClickOutcome, ViewState};
use crate::assets::AssetRegistry;
use crate::config::Config;
use crate::model::SettingChange;

/// Ties the GPU-side objects and widgets to the `ViewState` they mirror.
pub struct View {
    state: ViewState,
    nodes: SceneNodes,
    renderer: OrbitPathRenderer,
    panel: ControlPanel,
    overlay: OverlayWidgets,
}

impl View {
    pub fn new(window: &mut Window, config: &Config) -> Self {
        let assets = AssetRegistry::standard(&config.assets);
        assets.report();

        // The config size is in logical pixels; everything downstream of the
        // camera works in framebuffer pixels
        let mut state = ViewState::new(config);
        state.resize(window.width(), window.height());

        let mut nodes = SceneNodes::build(window, state.system(), &assets);
        nodes.apply_ambient(state.settings().ambient_intensity());

        let orbit_color = Point3::new(1.0, 1.0, 1.0);
        let mut renderer = OrbitPathRenderer::new();
        for path in state.orbit_paths().iter() {
            renderer.add_path(path, orbit_color);
        }

        let panel = ControlPanel::new(window.conrod_ui_mut());
        let overlay = OverlayWidgets::new(window.conrod_ui_mut());

        Self {
            state,
            nodes,
            renderer,
            panel,
            overlay,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn update_state(&mut self) {
        self.state.advance();
        self.nodes.sync(self.state.system());
    }

    pub fn click(&mut self, cursor: &Point2<f32>) -> ClickOutcome {
        self.state.click(cursor)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);
    }

    fn change_setting(&mut self, change: SettingChange) {
        match self.state.change_setting(change) {
            SettingChange::RealView(_) => self
                .nodes
                .apply_ambient(self.state.settings().ambient_intensity()),
            SettingChange::ShowOrbits(_) => self.renderer.sync_visibility(self.state.orbit_paths()),
            // Read straight from the settings every frame
            SettingChange::Speed(_) => {}
        }
    }

    /// Lays out this frame's widgets and applies whatever they report.
    pub fn prerender_scene(&mut self, window: &mut Window) {
        self.state.sync_viewport();

        let (changes, close_clicked) = {
            let mut ui = window.conrod_ui_mut().set_widgets();
            let changes = self.panel.set_widgets(&mut ui, self.state.settings());
            let close_clicked = self.overlay.set_widgets(&mut ui, self.state.overlay());
            (changes, close_clicked)
        };

        for change in changes {
            self.change_setting(change);
        }
        if close_clicked {
            self.state.close_overlay();
        }
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (
            Some(self.state.camera_mut()),
            None,
            Some(&mut self.renderer),
            None,
        )
    }
}
