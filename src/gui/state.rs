use log::{debug, info};
use nalgebra::Point2;

use super::camera::OrbitCamera;
use super::overlay::InfoOverlay;
use super::viewport::Viewport;
use crate::config::Config;
use crate::model::{BodyID, Catalog, OrbitPath, OrbitPaths, SettingChange, Settings, SolarSystem};
use crate::pick;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Picked(BodyID),
    Missed,
}

/// Everything the view keeps track of that doesn't live on the GPU: the model,
/// the settings, and the bits of UI state. All of it is touched from the one
/// event-processing thread, in the order events arrive.
pub struct ViewState {
    system: SolarSystem,
    settings: Settings,
    orbit_paths: OrbitPaths,
    camera: OrbitCamera,
    viewport: Viewport,
    overlay: InfoOverlay,
}

impl ViewState {
    pub fn new(config: &Config) -> Self {
        let system = SolarSystem::new(Catalog::solar_system());

        let mut orbit_paths = OrbitPaths::new();
        for body in system.bodies() {
            orbit_paths.register(OrbitPath::for_body(body));
        }
        orbit_paths.set_all_visible(config.settings.show_orbits());

        Self {
            system,
            settings: config.settings,
            orbit_paths,
            camera: OrbitCamera::new(config.width, config.height),
            viewport: Viewport::new(config.width, config.height),
            overlay: InfoOverlay::new(),
        }
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn orbit_paths(&self) -> &OrbitPaths {
        &self.orbit_paths
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn overlay(&self) -> &InfoOverlay {
        &self.overlay
    }

    /// One frame of motion at the current speed.
    pub fn advance(&mut self) {
        self.system.step(self.settings.speed());
    }

    /// Applies a setting and its side effects on the model. Returns the change
    /// that actually took effect.
    pub fn change_setting(&mut self, change: SettingChange) -> SettingChange {
        let applied = self.settings.apply(change);
        match applied {
            SettingChange::RealView(v) => info!(
                "realView = {}, ambient intensity {}",
                v,
                self.settings.ambient_intensity()
            ),
            SettingChange::Speed(s) => info!("speed = {}", s),
            SettingChange::ShowOrbits(v) => {
                info!("showOrbits = {}", v);
                self.orbit_paths.set_all_visible(v);
            }
        }
        applied
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height, &mut self.camera);
    }

    /// Brings the viewport in line with the framebuffer size the camera was
    /// last given.
    pub fn sync_viewport(&mut self) {
        self.viewport.follow(&self.camera);
    }

    pub fn close_overlay(&mut self) {
        self.overlay.hide();
    }

    /// Resolves a click on the scene. Clicks on the panel or the overlay never
    /// get here; the widgets keep them.
    pub fn click(&mut self, cursor: &Point2<f32>) -> ClickOutcome {
        self.sync_viewport();

        let ndc = self.viewport.to_ndc(cursor);
        let ray = match self.camera.ray_from_ndc(&ndc) {
            Some(ray) => ray,
            None => return ClickOutcome::Missed,
        };

        match pick::pick(&ray, &self.system) {
            Some(body) => {
                self.overlay.show(body.info.name, body.info.description);
                ClickOutcome::Picked(body.id)
            }
            None => {
                debug!("Click at ({}, {}) hit nothing", cursor.x, cursor.y);
                ClickOutcome::Missed
            }
        }
    }
}
