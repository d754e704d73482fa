use nalgebra::{Point3, UnitQuaternion, Vector3};

use super::body::{Body, BodyID, Catalog};

/// Accumulated rotation of one body. Neither angle is wrapped; everything
/// downstream only feeds them through periodic functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    // rotation of the pivot about +y, i.e., the revolution
    pub orbit_angle: f64,
    // rotation of the body mesh about its own +y
    pub spin_angle: f64,
}

/// Runtime state of the whole scene, independent of any rendering.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    catalog: Catalog,
    central_spin: f64,
    // Indexed by BodyID
    states: Vec<BodyState>,
    frame_count: u64,
}

impl SolarSystem {
    pub fn new(catalog: Catalog) -> Self {
        let states = vec![BodyState::default(); catalog.len()];
        Self {
            catalog,
            central_spin: 0.0,
            states,
            frame_count: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.catalog.bodies()
    }

    /// Advances every rotation by one frame's worth, scaled by `speed`.
    /// Increments are per frame, not per second.
    pub fn step(&mut self, speed: f64) {
        debug_assert!(speed >= 0.0, "Speed multiplier must be non-negative");

        self.central_spin += speed * self.catalog.central().spin_speed;
        for (state, body) in self.states.iter_mut().zip(self.catalog.bodies()) {
            state.orbit_angle += speed * body.info.orbit_speed;
            state.spin_angle += speed * body.info.spin_speed;
        }
        self.frame_count += 1;
    }

    pub fn central_spin(&self) -> f64 {
        self.central_spin
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn state(&self, id: BodyID) -> Option<BodyState> {
        self.states.get(id.0).copied()
    }

    /// World-space center of the body: its resting offset along +x, carried
    /// around by the pivot's rotation.
    pub fn body_position(&self, id: BodyID) -> Option<Point3<f64>> {
        let body = self.catalog.get(id)?;
        let state = self.state(id)?;
        let rest = Point3::new(body.info.orbital_distance as f64, 0.0, 0.0);
        Some(pivot_rotation(state.orbit_angle) * rest)
    }
}

pub fn pivot_rotation(angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle)
}
