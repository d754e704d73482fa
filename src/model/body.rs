use nalgebra::Point3;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

// All the immutable info about an orbiting body. Speeds are radians per frame,
// before the global speed multiplier is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub radius: f32,
    pub texture: &'static str,
    // Used when the texture can't be found
    pub color: Point3<f32>,
    pub orbital_distance: f32,
    pub orbit_speed: f64,
    pub spin_speed: f64,
    pub ring: Option<Ring>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CentralBodyInfo {
    pub name: &'static str,
    pub radius: f32,
    pub texture: &'static str,
    pub color: Point3<f32>,
    pub spin_speed: f64,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
}

/// The fixed set of bodies making up the scene. Ids are assigned in insertion
/// order, and are what picking resolves to.
#[derive(Debug, Clone)]
pub struct Catalog {
    central: CentralBodyInfo,
    bodies: Vec<Body>,
}

impl Catalog {
    pub fn new(central: CentralBodyInfo) -> Self {
        Self {
            central,
            bodies: vec![],
        }
    }

    pub fn solar_system() -> Self {
        let mut catalog = Self::new(sun());
        for info in planets() {
            catalog.add_body(info);
        }
        catalog
    }

    pub fn add_body(&mut self, info: BodyInfo) -> BodyID {
        let id = BodyID(self.bodies.len());
        self.bodies.push(Body { id, info });
        id
    }

    pub fn central(&self) -> &CentralBodyInfo {
        &self.central
    }

    pub fn get(&self, id: BodyID) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|b| b.info.name.eq_ignore_ascii_case(name))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

pub fn sun() -> CentralBodyInfo {
    CentralBodyInfo {
        name: "Sun",
        radius: 15.0,
        texture: "sun",
        color: Point3::new(1.0, 0.85, 0.4),
        spin_speed: 0.004,
    }
}

pub fn planets() -> Vec<BodyInfo> {
    // Less typing
    macro_rules! planet {
        ($name:expr, $radius:expr, $texture:expr, $color:expr, $dist:expr, $orbit:expr, $spin:expr, $ring:expr, $desc:expr $(,)?) => {
            BodyInfo {
                name: $name,
                description: $desc,
                radius: $radius,
                texture: $texture,
                color: Point3::new($color.0, $color.1, $color.2),
                orbital_distance: $dist,
                orbit_speed: $orbit,
                spin_speed: $spin,
                ring: $ring,
            }
        };
    }

    vec![
        planet!(
            "Mercury", 3.2, "mercury", (0.6, 0.6, 0.6), 28.0, 0.004, 0.004, None,
            "Mercury is the smallest planet and closest to the Sun.",
        ),
        planet!(
            "Venus", 5.8, "venus", (0.9, 0.75, 0.45), 44.0, 0.015, 0.002, None,
            "Venus has a thick atmosphere, making it the hottest planet.",
        ),
        planet!(
            "Earth", 6.0, "earth", (0.25, 0.45, 0.85), 62.0, 0.01, 0.02, None,
            "Earth is the only planet known to support life.",
        ),
        planet!(
            "Mars", 4.0, "mars", (0.8, 0.35, 0.2), 78.0, 0.008, 0.018, None,
            "Mars is known as the Red Planet and may have had liquid water.",
        ),
        planet!(
            "Jupiter", 12.0, "jupiter", (0.8, 0.65, 0.5), 100.0, 0.002, 0.04, None,
            "Jupiter is the largest planet with a Great Red Spot storm.",
        ),
        planet!(
            "Saturn", 10.0, "saturn", (0.85, 0.75, 0.55), 138.0, 0.0009, 0.038,
            Some(Ring {
                inner_radius: 10.0,
                outer_radius: 20.0,
                texture: "saturn_ring",
            }),
            "Saturn is famous for its beautiful ring system.",
        ),
        planet!(
            "Uranus", 7.0, "uranus", (0.55, 0.8, 0.85), 176.0, 0.0004, 0.03,
            Some(Ring {
                inner_radius: 7.0,
                outer_radius: 12.0,
                texture: "uranus_ring",
            }),
            "Uranus rotates on its side and has a bluish-green color.",
        ),
        planet!(
            "Neptune", 7.0, "neptune", (0.25, 0.35, 0.9), 200.0, 0.0001, 0.032, None,
            "Neptune is a cold, windy planet with deep blue color.",
        ),
        planet!(
            "Pluto", 2.8, "pluto", (0.75, 0.7, 0.65), 216.0, 0.0007, 0.008, None,
            "Pluto, a dwarf planet, has an icy and rocky surface.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_catalog() {
        let catalog = Catalog::solar_system();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.central().name, "Sun");

        let ringed: Vec<_> = catalog
            .bodies()
            .filter(|b| b.info.ring.is_some())
            .map(|b| b.info.name)
            .collect();
        assert_eq!(ringed, vec!["Saturn", "Uranus"]);

        // Ids are positional, and every body knows its own description
        for (i, body) in catalog.bodies().enumerate() {
            assert_eq!(body.id, BodyID(i));
            assert!(body.info.description.starts_with(body.info.name));
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::solar_system();
        let earth = catalog.find_by_name("earth").unwrap();
        assert_eq!(earth.info.orbital_distance, 62.0);
        assert_eq!(catalog.get(earth.id).unwrap().info.name, "Earth");
        assert!(catalog.get(BodyID(9)).is_none());
        assert!(catalog.find_by_name("Vulcan").is_none());
    }
}
