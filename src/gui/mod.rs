use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use log::info;

use self::controller::{Controller, StopHandle};
use self::view::View;
use crate::config::Config;

pub mod camera;
pub mod controller;
pub mod overlay;
pub mod panel;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod view;
pub mod viewport;

pub struct Simulation {
    view: View,
    controller: Controller,
    stop: StopHandle,
}

impl Simulation {
    pub fn new(window: &mut Window, config: &Config) -> Self {
        let stop = StopHandle::new();
        Self {
            view: View::new(window, config),
            controller: Controller::new(stop.clone()),
            stop,
        }
    }

    /// Requests that the frame loop end. Takes effect at the start of the next frame.
    pub fn stop(&self) {
        self.stop.stop();
    }

    fn process_user_input(&mut self, mut events: EventManager, over_widgets: bool) {
        for event in events.iter() {
            self.controller
                .process_event(event, over_widgets, &mut self.view);
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        if self.stop.is_stopped() {
            info!(
                "Closing after {} frames",
                self.view.state().system().frame_count()
            );
            window.close();
            return;
        }

        let over_widgets = pointer_over_widgets(window);
        self.process_user_input(window.events(), over_widgets);
        self.view.update_state();
        self.view.prerender_scene(window);
        self.controller.increment_frame_counter();
    }
}

// Hovering counts as well as capturing, so a click on the panel's background
// doesn't fall through to the scene
fn pointer_over_widgets(window: &Window) -> bool {
    let ui = window.conrod_ui();
    let under_mouse = ui.global_input().current.widget_under_mouse;
    window.is_conrod_ui_capturing_mouse() || (under_mouse.is_some() && under_mouse != Some(ui.window))
}
