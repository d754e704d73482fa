use log::debug;
use nalgebra::Point2;

use super::camera::OrbitCamera;

/// Size of the render target, in framebuffer pixels. The camera is the source of
/// truth: kiss3d hands it the framebuffer size every frame, and the viewport
/// follows along before turning pixels into rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Safe to call as often as the window likes; zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32, camera: &mut OrbitCamera) {
        if width == 0 || height == 0 {
            debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        debug!("Resizing viewport to {}x{}", width, height);
        self.width = width;
        self.height = height;
        camera.resize(width, height);
    }

    /// Picks up a size the camera learned about behind our back. Returns whether
    /// anything changed.
    pub fn follow(&mut self, camera: &OrbitCamera) -> bool {
        let size = (camera.width(), camera.height());
        if size == self.size() {
            return false;
        }
        debug!("Viewport following camera to {}x{}", size.0, size.1);
        self.width = size.0;
        self.height = size.1;
        true
    }

    /// Maps a pixel position to normalized device coordinates, flipping y.
    pub fn to_ndc(&self, pixel: &Point2<f32>) -> Point2<f32> {
        Point2::new(
            pixel.x / self.width as f32 * 2.0 - 1.0,
            -(pixel.y / self.height as f32) * 2.0 + 1.0,
        )
    }

    pub fn from_ndc(&self, ndc: &Point2<f32>) -> Point2<f32> {
        Point2::new(
            (ndc.x + 1.0) / 2.0 * self.width as f32,
            (1.0 - ndc.y) / 2.0 * self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_to_ndc() {
        let viewport = Viewport::new(800, 600);
        assert_relative_eq!(viewport.to_ndc(&Point2::new(0.0, 0.0)), Point2::new(-1.0, 1.0));
        assert_relative_eq!(viewport.to_ndc(&Point2::new(400.0, 300.0)), Point2::new(0.0, 0.0));
        assert_relative_eq!(
            viewport.to_ndc(&Point2::new(800.0, 600.0)),
            Point2::new(1.0, -1.0)
        );

        let pixel = Point2::new(123.0, 456.0);
        assert_relative_eq!(viewport.from_ndc(&viewport.to_ndc(&pixel)), pixel, epsilon = 1e-3);
    }

    #[test]
    fn test_resize_updates_camera() {
        let mut viewport = Viewport::new(800, 600);
        let mut camera = OrbitCamera::new(800, 600);

        viewport.resize(1024, 256, &mut camera);
        assert_eq!(viewport.size(), (1024, 256));
        assert_relative_eq!(camera.aspect(), 4.0);

        viewport.resize(0, 256, &mut camera);
        assert_eq!(viewport.size(), (1024, 256));
    }

    #[test]
    fn test_follow_camera() {
        let mut viewport = Viewport::new(1280, 720);
        let mut camera = OrbitCamera::new(1280, 720);
        assert!(!viewport.follow(&camera));

        // What kiss3d does on a 2x display, without any resize event
        camera.resize(2560, 1440);
        assert!(viewport.follow(&camera));
        assert_eq!(viewport.size(), (2560, 1440));
        assert_relative_eq!(
            viewport.to_ndc(&Point2::new(1280.0, 720.0)),
            Point2::new(0.0, 0.0)
        );
    }
}
