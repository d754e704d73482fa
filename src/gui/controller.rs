use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use kiss3d::event::{Action, Event, MouseButton, WindowEvent};
use log::{debug, info};
use nalgebra::Point2;

use super::view::View;

// A press and release further apart than this (in pixels) is a drag, which
// belongs to the camera
const CLICK_SLOP: f32 = 4.0;

/// Shared flag that ends the frame loop at the start of the next frame.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        if !self.0.replace(true) {
            info!("Stop requested");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Click(Point2<f32>),
    Resize(u32, u32),
    Stop,
}

pub struct Controller {
    // Last known pointer position, in framebuffer pixels
    cursor: Point2<f32>,
    press_pos: Option<Point2<f32>>,
    stop: StopHandle,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            let fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            debug!("{:.0} fps", fps);
            self.reset();
        }
    }
}

impl Controller {
    pub fn new(stop: StopHandle) -> Self {
        Controller {
            cursor: Point2::origin(),
            press_pos: None,
            stop,
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn cursor(&self) -> Point2<f32> {
        self.cursor
    }

    /// Turns raw window events into the handful of things the view cares about.
    /// Pointer motion only updates the cached cursor. Presses and releases
    /// while the pointer is over a widget belong to the widget.
    pub fn interpret(&mut self, event: &WindowEvent, over_widgets: bool) -> Option<Command> {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = Point2::new(x as f32, y as f32);
                None
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.press_pos = if over_widgets { None } else { Some(self.cursor) };
                None
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                let press_pos = self.press_pos.take()?;
                if over_widgets {
                    return None;
                }
                if (self.cursor - press_pos).norm() <= CLICK_SLOP {
                    Some(Command::Click(self.cursor))
                } else {
                    None
                }
            }
            WindowEvent::FramebufferSize(w, h) => Some(Command::Resize(w, h)),
            WindowEvent::Close => Some(Command::Stop),
            _ => None,
        }
    }

    pub fn process_event(&mut self, event: Event, over_widgets: bool, view: &mut View) {
        match self.interpret(&event.value, over_widgets) {
            Some(Command::Click(cursor)) => {
                view.click(&cursor);
            }
            Some(Command::Resize(w, h)) => view.resize(w, h),
            Some(Command::Stop) => self.stop.stop(),
            None => {}
        }
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kiss3d::event::Modifiers;

    fn cursor(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorPos(x, y, Modifiers::empty())
    }

    fn button(action: Action) -> WindowEvent {
        WindowEvent::MouseButton(MouseButton::Button1, action, Modifiers::empty())
    }

    #[test]
    fn test_click() {
        let mut controller = Controller::new(StopHandle::new());
        assert_eq!(controller.interpret(&cursor(100.0, 200.0), false), None);
        assert_eq!(controller.cursor(), Point2::new(100.0, 200.0));
        assert_eq!(controller.interpret(&button(Action::Press), false), None);
        controller.interpret(&cursor(102.0, 201.0), false);
        assert_eq!(
            controller.interpret(&button(Action::Release), false),
            Some(Command::Click(Point2::new(102.0, 201.0)))
        );
    }

    #[test]
    fn test_drag_is_not_a_click() {
        let mut controller = Controller::new(StopHandle::new());
        controller.interpret(&cursor(100.0, 200.0), false);
        controller.interpret(&button(Action::Press), false);
        controller.interpret(&cursor(180.0, 260.0), false);
        assert_eq!(controller.interpret(&button(Action::Release), false), None);

        // Release without a press, e.g. the press happened outside the window
        assert_eq!(controller.interpret(&button(Action::Release), false), None);
    }

    #[test]
    fn test_widget_clicks_stay_with_widgets() {
        let mut controller = Controller::new(StopHandle::new());
        controller.interpret(&cursor(40.0, 40.0), true);

        // Pressed on the slider
        controller.interpret(&button(Action::Press), true);
        assert_eq!(controller.interpret(&button(Action::Release), false), None);

        // Pressed in the scene, released on a widget
        controller.interpret(&button(Action::Press), false);
        assert_eq!(controller.interpret(&button(Action::Release), true), None);

        // And the scene still gets its clicks afterwards
        controller.interpret(&button(Action::Press), false);
        assert_eq!(
            controller.interpret(&button(Action::Release), false),
            Some(Command::Click(Point2::new(40.0, 40.0)))
        );
    }

    #[test]
    fn test_resize_and_close() {
        let mut controller = Controller::new(StopHandle::new());
        assert_eq!(
            controller.interpret(&WindowEvent::FramebufferSize(640, 480), false),
            Some(Command::Resize(640, 480))
        );
        assert_eq!(controller.interpret(&WindowEvent::Close, false), Some(Command::Stop));
    }

    #[test]
    fn test_stop_handle() {
        let handle = StopHandle::new();
        let clone = handle.clone();
        assert!(!handle.is_stopped());
        clone.stop();
        assert!(handle.is_stopped());
        clone.stop();
        assert!(handle.is_stopped());
    }
}
