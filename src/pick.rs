use log::debug;
use nalgebra::Point3;

use crate::math::ray::Ray;
use crate::model::{Body, BodyID, SolarSystem};

/// Something the picker can hit. Carries the id of the body it stands for, so a
/// hit never has to be matched back up by position in some list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTarget {
    pub id: BodyID,
    pub center: Point3<f32>,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: BodyID,
    pub distance: f32,
    pub point: Point3<f32>,
}

/// Current pickable spheres. Only body meshes are candidates; the central body,
/// rings and orbit paths never are.
pub fn targets(system: &SolarSystem) -> Vec<PickTarget> {
    system
        .bodies()
        .filter_map(|body| {
            let center: Point3<f32> = nalgebra::convert(system.body_position(body.id)?);
            Some(PickTarget {
                id: body.id,
                center,
                radius: body.info.radius,
            })
        })
        .collect()
}

/// All intersections, nearest first. Ties keep the order of `targets`.
pub fn intersect_all<'a, I>(ray: &Ray, targets: I) -> Vec<Hit>
where
    I: IntoIterator<Item = &'a PickTarget>,
{
    let mut hits: Vec<Hit> = targets
        .into_iter()
        .filter_map(|target| {
            let distance = ray.intersect_sphere(&target.center, target.radius)?;
            Some(Hit {
                id: target.id,
                distance,
                point: ray.at(distance),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Resolves a ray to the nearest body it passes through, if any.
pub fn pick<'s>(ray: &Ray, system: &'s SolarSystem) -> Option<&'s Body> {
    let hits = intersect_all(ray, targets(system).iter());
    let nearest = match hits.first() {
        Some(hit) => hit,
        None => {
            debug!("Pick missed every body");
            return None;
        }
    };

    let p = nearest.point;
    debug!(
        "Ray hit {:?} at ({:.1}, {:.1}, {:.1}), {:.1} from the eye",
        nearest.id, p.x, p.y, p.z, nearest.distance
    );

    // Could only fail if the catalog and the targets disagree; that's a miss too
    system.catalog().get(nearest.id)
}
