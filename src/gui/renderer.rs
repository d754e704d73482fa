use kiss3d::camera::Camera;
use kiss3d::context::Context;
use kiss3d::renderer::Renderer;
use kiss3d::resource::{
    AllocationType, BufferType, Effect, GPUVec, ShaderAttribute, ShaderUniform,
};

use nalgebra::{Matrix4, Point3};

use crate::model::{BodyID, OrbitPath, OrbitPaths};

struct PathData {
    body: BodyID,
    // Closed loop, stored as (pt, color, pt, color)
    lines: GPUVec<Point3<f32>>,
    visible: bool,
}

/// Draws the orbit paths. Their geometry never changes, so the buffers are
/// built once and only visibility is refreshed each frame.
pub struct OrbitPathRenderer {
    // OpenGL stuff
    shader: Effect,
    pos: ShaderAttribute<Point3<f32>>,
    color: ShaderAttribute<Point3<f32>>,
    view: ShaderUniform<Matrix4<f32>>,
    proj: ShaderUniform<Matrix4<f32>>,
    line_width: f32,
    // Data storage
    paths: Vec<PathData>,
}

impl OrbitPathRenderer {
    pub fn new() -> Self {
        let mut shader = Effect::new_from_str(VERTEX_SRC, FRAGMENT_SRC);

        shader.use_program();

        OrbitPathRenderer {
            pos: shader
                .get_attrib::<Point3<f32>>("position")
                .expect("Failed to get shader attribute."),
            color: shader
                .get_attrib::<Point3<f32>>("color")
                .expect("Failed to get shader attribute."),
            view: shader
                .get_uniform::<Matrix4<f32>>("view")
                .expect("Failed to get shader uniform."),
            proj: shader
                .get_uniform::<Matrix4<f32>>("proj")
                .expect("Failed to get shader uniform."),
            shader,
            line_width: 1.0,
            paths: vec![],
        }
    }

    pub fn add_path(&mut self, path: &OrbitPath, color: Point3<f32>) {
        let mut data = Vec::with_capacity(4 * path.points().len());
        for (a, b) in path.segments() {
            data.push(a);
            data.push(color);
            data.push(b);
            data.push(color);
        }

        self.paths.push(PathData {
            body: path.body(),
            lines: GPUVec::new(data, BufferType::Array, AllocationType::StaticDraw),
            visible: path.is_visible(),
        });
    }

    pub fn sync_visibility(&mut self, paths: &OrbitPaths) {
        for path in paths.iter() {
            if let Some(data) = self.paths.iter_mut().find(|d| d.body == path.body()) {
                data.visible = path.is_visible();
            }
        }
    }
}

impl Renderer for OrbitPathRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        if !self.paths.iter().any(|p| p.visible) {
            return;
        }

        self.shader.use_program();
        self.pos.enable();
        self.color.enable();

        camera.upload(pass, &mut self.proj, &mut self.view);

        let ctxt = Context::get();
        ctxt.line_width(self.line_width);
        for path in self.paths.iter_mut().filter(|p| p.visible) {
            self.pos.bind_sub_buffer(&mut path.lines, 1, 0);
            self.color.bind_sub_buffer(&mut path.lines, 1, 1);
            ctxt.draw_arrays(Context::LINES, 0, (path.lines.len() / 2) as i32);
        }

        self.pos.disable();
        self.color.disable();
    }
}

/// Vertex shader used by the material to display line.
static VERTEX_SRC: &str = "#version 100
    attribute vec3 position;
    attribute vec3 color;
    varying   vec3 vColor;
    uniform   mat4 proj;
    uniform   mat4 view;
    void main() {
        gl_Position = proj * view * vec4(position, 1.0);
        vColor = color;
    }";

/// Fragment shader used by the material to display line.
static FRAGMENT_SRC: &str = "#version 100
#ifdef GL_FRAGMENT_PRECISION_HIGH
   precision highp float;
#else
   precision mediump float;
#endif

    varying vec3 vColor;
    void main() {
        gl_FragColor = vec4(vColor, 1.0);
    }";
