use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point2, Point3, Vector2, Vector3, Vector4};

use crate::math::ray::Ray;

pub const DAMPING: f32 = 0.05;

// Starting eye position is (0, 50, 200)
const INITIAL_HEIGHT: f32 = 50.0;
const INITIAL_DEPTH: f32 = 200.0;

// A close cousin of ArcBall that always looks at the origin with +y up, and
// smooths out drags: input is banked as a pending delta, and every frame only
// a fraction of it is applied. This is where the "damping" comes from.
pub struct OrbitCamera {
    // -- position --
    theta: f32,  // azimuthal angle, measured from +z towards +x
    phi: f32,    // polar angle, measured from +y
    radius: f32, // distance from origin
    // -- pending motion --
    pending_theta: f32,
    pending_phi: f32,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    // -- other --
    last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    damping: f32,
    rotate_speed: f32,
    scroll_ratio: f32,
    phi_limit: f32,
    radius_limits: (f32, f32),
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        let radius = INITIAL_HEIGHT.hypot(INITIAL_DEPTH);
        OrbitCamera {
            theta: 0.0,
            phi: (INITIAL_HEIGHT / radius).acos(),
            radius,
            pending_theta: 0.0,
            pending_phi: 0.0,
            width: width.max(1),
            height: height.max(1),
            fovy: 75.0f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
            last_cursor_pos: Vector2::zeros(),
            damping: DAMPING,
            rotate_speed: 1.0,
            scroll_ratio: 1.1,
            phi_limit: 0.01,
            radius_limits: (20.0, 450.0),
        }
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(self.aspect(), self.fovy, self.znear, self.zfar)
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        // A minimized window reports zero; keep the last usable projection
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
    }

    /// Banks a rotation to be eased in over the following frames.
    pub fn rotate(&mut self, dtheta: f32, dphi: f32) {
        self.pending_theta += dtheta;
        self.pending_phi += dphi;
    }

    pub fn zoom(&mut self, factor: f32) {
        self.radius = nalgebra::clamp(
            self.radius * factor,
            self.radius_limits.0,
            self.radius_limits.1,
        );
    }

    /// Applies one frame's share of the pending rotation.
    pub fn apply_damping(&mut self) {
        let dtheta = self.pending_theta * self.damping;
        let dphi = self.pending_phi * self.damping;

        self.theta = (self.theta + dtheta) % (2.0 * PI);
        self.phi = nalgebra::clamp(self.phi + dphi, self.phi_limit, PI - self.phi_limit);

        self.pending_theta -= dtheta;
        self.pending_phi -= dphi;
    }

    /// World-space ray from the eye through a point given in normalized device
    /// coordinates (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: &Point2<f32>) -> Option<Ray> {
        let inverse = self.transformation().try_inverse()?;
        let near_pt = Point3::from_homogeneous(inverse * Vector4::new(ndc.x, ndc.y, -1.0, 1.0))?;
        let eye = self.eye();
        Ray::new(eye, near_pt - eye)
    }

    /// Where a world-space point lands on screen, in normalized device coordinates.
    pub fn project_to_ndc(&self, world: &Point3<f32>) -> Option<Point2<f32>> {
        let projected = Point3::from_homogeneous(self.transformation() * world.to_homogeneous())?;
        Some(Point2::new(projected.x, projected.y))
    }
}

impl Camera for OrbitCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Dragging right swings the camera left, so the scene
                    // appears to follow the cursor
                    let dpos = curr_pos - self.last_cursor_pos;
                    let per_pixel = 2.0 * PI * self.rotate_speed / self.height as f32;
                    self.rotate(-dpos.x * per_pixel, -dpos.y * per_pixel);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::Scroll(_, off, _) => {
                // scroll up == zoom in
                if off < 0.0 {
                    self.zoom(self.scroll_ratio);
                } else if off > 0.0 {
                    self.zoom(self.scroll_ratio.recip())
                }
            }
            WindowEvent::FramebufferSize(w, h) => self.resize(w, h),
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        )
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &Vector3::y())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    fn update(&mut self, _canvas: &Canvas) {
        self.apply_damping();
    }

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
