use nalgebra::{Point2, Point3, Vector3};

use std::f32::consts::{PI, TAU};

/// Triangle soup in the layout the renderer's mesh type wants.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub coords: Vec<Point3<f32>>,
    pub faces: Vec<Point3<u16>>,
    pub normals: Vec<Vector3<f32>>,
    pub uvs: Vec<Point2<f32>>,
}

impl MeshData {
    pub fn face_normal(&self, face: usize) -> Vector3<f32> {
        let f = self.faces[face];
        let a = self.coords[f.x as usize];
        let b = self.coords[f.y as usize];
        let c = self.coords[f.z as usize];
        (b - a).cross(&(c - a))
    }
}

pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(
        num_segments >= 1,
        "Must have at least one segment, num_segments was {}",
        num_segments
    );
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

/// Samples a circle of the given radius in the xz-plane, with `num_segments + 1`
/// points. The first and last points coincide.
pub fn orbit_circle(radius: f32, num_segments: usize) -> Vec<Point3<f32>> {
    let f = |angle: f32| Point3::new(radius * angle.cos(), 0.0, radius * angle.sin());
    path_iter_parametric(f, 0.0, TAU, num_segments).collect()
}

/// Flat annulus in the xy-plane facing +z. Texture coordinates span the outer
/// square, so a ring texture drawn edge-to-edge lines up with the outer radius.
pub fn ring_mesh(inner_radius: f32, outer_radius: f32, theta_segments: usize) -> MeshData {
    assert!(theta_segments >= 3, "Ring needs at least 3 segments");
    assert!(
        inner_radius < outer_radius,
        "Inner radius {} must be smaller than outer radius {}",
        inner_radius,
        outer_radius
    );

    let mut mesh = MeshData {
        coords: vec![],
        faces: vec![],
        normals: vec![],
        uvs: vec![],
    };

    // Two concentric loops of vertices: inner first, then outer
    for radius in [inner_radius, outer_radius] {
        for i in 0..=theta_segments {
            let theta = TAU * (i as f32) / (theta_segments as f32);
            let (x, y) = (radius * theta.cos(), radius * theta.sin());
            mesh.coords.push(Point3::new(x, y, 0.0));
            mesh.normals.push(Vector3::z());
            mesh.uvs.push(Point2::new(
                (x / outer_radius + 1.0) / 2.0,
                (y / outer_radius + 1.0) / 2.0,
            ));
        }
    }

    let stride = (theta_segments + 1) as u16;
    for i in 0..theta_segments as u16 {
        let a = i;
        let b = i + stride;
        let c = i + stride + 1;
        let d = i + 1;
        mesh.faces.push(Point3::new(a, b, d));
        mesh.faces.push(Point3::new(b, c, d));
    }

    mesh
}

/// Latitude/longitude sphere. Winding always faces outward; with `inward_normals`
/// the shading normals are flipped, so a light at the center lights the outside.
pub fn uv_sphere(radius: f32, segments: usize, rings: usize, inward_normals: bool) -> MeshData {
    assert!(segments >= 3 && rings >= 2, "Sphere is too coarse");
    assert!(
        (segments + 1) * (rings + 1) <= u16::MAX as usize,
        "Sphere has too many vertices for 16-bit indices"
    );

    let mut mesh = MeshData {
        coords: vec![],
        faces: vec![],
        normals: vec![],
        uvs: vec![],
    };

    let sign = if inward_normals { -1.0 } else { 1.0 };
    for iy in 0..=rings {
        let v = iy as f32 / rings as f32;
        let polar = v * PI;
        for ix in 0..=segments {
            let u = ix as f32 / segments as f32;
            let azimuth = u * TAU;
            let dir = Vector3::new(
                -azimuth.cos() * polar.sin(),
                polar.cos(),
                azimuth.sin() * polar.sin(),
            );
            mesh.coords.push(Point3::from(dir * radius));
            mesh.normals.push(dir * sign);
            mesh.uvs.push(Point2::new(u, 1.0 - v));
        }
    }

    let row = segments + 1;
    let index = |iy: usize, ix: usize| (iy * row + ix) as u16;
    for iy in 0..rings {
        for ix in 0..segments {
            let a = index(iy, ix + 1);
            let b = index(iy, ix);
            let c = index(iy + 1, ix);
            let d = index(iy + 1, ix + 1);

            // The triangles touching the poles are degenerate, skip them
            if iy != 0 {
                mesh.faces.push(Point3::new(a, b, d));
            }
            if iy != rings - 1 {
                mesh.faces.push(Point3::new(b, c, d));
            }
        }
    }

    mesh
}
