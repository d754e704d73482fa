use nalgebra::Point3;

use crate::math::geometry::orbit_circle;

use super::body::{Body, BodyID};

pub const ORBIT_PATH_SEGMENTS: usize = 100;

/// A static circle tracing a body's orbit. It belongs to the scene root rather
/// than the body's pivot, so it never rotates.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    body: BodyID,
    points: Vec<Point3<f32>>,
    visible: bool,
}

impl OrbitPath {
    pub fn for_body(body: &Body) -> Self {
        Self {
            body: body.id,
            points: orbit_circle(body.info.orbital_distance, ORBIT_PATH_SEGMENTS),
            visible: true,
        }
    }

    pub fn body(&self) -> BodyID {
        self.body
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    /// Line segments of the closed loop, including the one from the last
    /// point back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Every registered orbit path; the visibility toggle acts on all of them at once.
#[derive(Debug, Clone, Default)]
pub struct OrbitPaths {
    paths: Vec<OrbitPath>,
}

impl OrbitPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, path: OrbitPath) {
        self.paths.push(path);
    }

    pub fn set_all_visible(&mut self, visible: bool) {
        for path in self.paths.iter_mut() {
            path.set_visible(visible);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitPath> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
