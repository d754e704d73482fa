use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

use kiss3d::resource::{Mesh, TextureManager};
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use log::{debug, warn};
use nalgebra::{Point3, Translation3, UnitQuaternion, Vector3};

use crate::assets::{AssetRegistry, STARS_TEXTURE};
use crate::error::AssetError;
use crate::math::geometry::{ring_mesh, uv_sphere, MeshData};
use crate::model::{Body, BodyID, SolarSystem};

// Has to stay inside the far clipping plane from anywhere the camera can go
pub const SKYDOME_RADIUS: f32 = 480.0;
// Fill light below the ambient term; see `ambient_tint`
pub const AMBIENT_BASE: f32 = 0.5;

const RING_SEGMENTS: usize = 32;

/// The nodes standing for one body. The pivot sits at the scene origin and its
/// rotation is the revolution; the mesh and ring hang off it at the orbital
/// distance. Only the mesh spins.
struct BodyNodes {
    pivot: SceneNode,
    mesh: SceneNode,
    // Never rotated on its own, only carried around by the pivot
    _ring: Option<SceneNode>,
    base_color: Point3<f32>,
}

pub struct SceneNodes {
    sun: SceneNode,
    _skydome: SceneNode,
    bodies: HashMap<BodyID, BodyNodes>,
}

impl SceneNodes {
    pub fn build(window: &mut Window, system: &SolarSystem, assets: &AssetRegistry) -> Self {
        // Stars on the inside of a big ball. The winding faces outward, so we
        // see its back faces from in here.
        let mut skydome = window.add_mesh(
            to_mesh(uv_sphere(SKYDOME_RADIUS, 48, 24, true)),
            Vector3::from_element(1.0),
        );
        skydome.enable_backface_culling(false);
        if !apply_texture(&mut skydome, assets, STARS_TEXTURE) {
            skydome.set_color(0.0, 0.0, 0.0);
        }

        // The light sits at the center of the sun, so inward normals make it
        // look lit from everywhere
        let central = system.catalog().central();
        let mut sun = window.add_mesh(
            to_mesh(uv_sphere(central.radius, 50, 50, true)),
            Vector3::from_element(1.0),
        );
        if !apply_texture(&mut sun, assets, central.texture) {
            sun.set_color(central.color.x, central.color.y, central.color.z);
        }

        let mut bodies = HashMap::new();
        for body in system.bodies() {
            bodies.insert(body.id, build_body(window.add_group(), body, assets));
        }

        let mut nodes = SceneNodes {
            sun,
            _skydome: skydome,
            bodies,
        };
        nodes.sync(system);
        nodes
    }

    /// Copies every rotation from the model onto its node.
    pub fn sync(&mut self, system: &SolarSystem) {
        self.sun.set_local_rotation(spin(system.central_spin()));
        for (id, nodes) in self.bodies.iter_mut() {
            let state = match system.state(*id) {
                Some(state) => state,
                None => continue,
            };
            nodes.pivot.set_local_rotation(spin(state.orbit_angle));
            nodes.mesh.set_local_rotation(spin(state.spin_angle));
        }
    }

    pub fn apply_ambient(&mut self, intensity: f32) {
        let tint = ambient_tint(intensity);
        for nodes in self.bodies.values_mut() {
            let c = nodes.base_color * tint;
            nodes.mesh.set_color(c.x, c.y, c.z);
        }
    }
}

fn build_body(mut pivot: SceneNode, body: &Body, assets: &AssetRegistry) -> BodyNodes {
    let info = &body.info;
    let offset = Translation3::new(info.orbital_distance, 0.0, 0.0);

    let mut mesh = pivot.add_sphere(info.radius);
    mesh.set_local_translation(offset);
    let base_color = if apply_texture(&mut mesh, assets, info.texture) {
        Point3::new(1.0, 1.0, 1.0)
    } else {
        info.color
    };

    let ring = info.ring.as_ref().map(|ring| {
        let mut node = pivot.add_mesh(
            to_mesh(ring_mesh(ring.inner_radius, ring.outer_radius, RING_SEGMENTS)),
            Vector3::from_element(1.0),
        );
        node.set_local_translation(offset);
        // Lay it down from the xy-plane into the orbital plane
        node.set_local_rotation(UnitQuaternion::from_axis_angle(
            &Vector3::x_axis(),
            -FRAC_PI_2,
        ));
        node.enable_backface_culling(false);
        if !apply_texture(&mut node, assets, ring.texture) {
            let c = info.color * 0.8;
            node.set_color(c.x, c.y, c.z);
        }
        node
    });

    BodyNodes {
        pivot,
        mesh,
        _ring: ring,
        base_color,
    }
}

/// Node tint standing in for an ambient term: the host renderer has a single
/// point light and no ambient of its own.
pub fn ambient_tint(intensity: f32) -> f32 {
    nalgebra::clamp(AMBIENT_BASE + intensity, 0.0, 1.0)
}

fn apply_texture(node: &mut SceneNode, assets: &AssetRegistry, name: &str) -> bool {
    match assets.load(name) {
        Ok(image) => {
            let mut image = Some(image);
            let texture = TextureManager::get_global_manager(|tm| {
                image.take().map(|image| tm.add_image(image, name))
            });
            match texture {
                Some(texture) => {
                    node.set_texture(texture);
                    true
                }
                None => false,
            }
        }
        Err(e @ AssetError::Decode { .. }) => {
            warn!("{}; using a flat color", e);
            false
        }
        Err(e) => {
            // Already reported when the registry was loaded
            debug!("{}; leaving node untextured", e);
            false
        }
    }
}

fn to_mesh(data: MeshData) -> Rc<RefCell<Mesh>> {
    let mesh = Mesh::new(
        data.coords,
        data.faces,
        Some(data.normals),
        Some(data.uvs),
        false,
    );
    Rc::new(RefCell::new(mesh))
}

fn spin(angle: f64) -> UnitQuaternion<f32> {
    // Angles grow forever, but the rotation only depends on them mod 2pi
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), (angle % TAU) as f32)
}
