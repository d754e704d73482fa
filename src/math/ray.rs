use nalgebra::{Point3, Unit, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Unit<Vector3<f32>>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Option<Self> {
        let direction = Unit::try_new(direction, f32::EPSILON)?;
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction.into_inner() * t
    }

    /// Distance along the ray to where it enters the sphere. Spheres are one-sided:
    /// a ray starting inside (or past) the sphere doesn't hit it.
    pub fn intersect_sphere(&self, center: &Point3<f32>, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction.as_ref());
        let c = oc.norm_squared() - radius * radius;

        // Starting inside
        if c < 0.0 {
            return None;
        }

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let t = -b - discriminant.sqrt();
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }
}
