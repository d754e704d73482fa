pub mod body;
pub mod orbit_path;
pub mod settings;
pub mod system;

pub use body::{Body, BodyID, BodyInfo, Catalog, CentralBodyInfo, Ring};
pub use orbit_path::{OrbitPath, OrbitPaths};
pub use settings::{SettingChange, Settings};
pub use system::{BodyState, SolarSystem};
