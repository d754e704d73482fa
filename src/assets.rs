use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{info, warn};

use crate::error::AssetError;

pub const STARS_TEXTURE: &str = "stars";

// Logical name and file name, relative to the asset directory
const STANDARD_TEXTURES: [(&str, &str); 13] = [
    (STARS_TEXTURE, "stars.jpg"),
    ("sun", "sun.jpg"),
    ("mercury", "mercury.jpg"),
    ("venus", "venus.jpg"),
    ("earth", "earth.jpg"),
    ("mars", "mars.jpg"),
    ("jupiter", "jupiter.jpg"),
    ("saturn", "saturn.jpg"),
    ("uranus", "uranus.jpg"),
    ("neptune", "neptune.jpg"),
    ("pluto", "pluto.jpg"),
    ("saturn_ring", "saturn_ring.png"),
    ("uranus_ring", "uranus_ring.png"),
];

/// Maps logical texture names to files on disk. Built once at startup and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    root: PathBuf,
    textures: BTreeMap<String, PathBuf>,
}

impl AssetRegistry {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            textures: BTreeMap::new(),
        }
    }

    pub fn standard<P: AsRef<Path>>(root: P) -> Self {
        let mut registry = Self::new(root);
        for (name, file) in STANDARD_TEXTURES.iter() {
            registry.register(name, file);
        }
        registry
    }

    pub fn register(&mut self, name: &str, file: &str) {
        let path = self.root.join(file);
        self.textures.insert(name.to_owned(), path);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.textures.keys().map(String::as_str)
    }

    /// Path to the texture, if it's registered and present on disk.
    pub fn resolve(&self, name: &str) -> Result<&Path, AssetError> {
        let path = self
            .textures
            .get(name)
            .ok_or_else(|| AssetError::Unknown(name.to_owned()))?;

        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::Missing {
                name: name.to_owned(),
                path: path.clone(),
            })
        }
    }

    /// Decodes the texture. A file that exists but isn't an image is an error
    /// here rather than a panic inside the renderer.
    pub fn load(&self, name: &str) -> Result<DynamicImage, AssetError> {
        let path = self.resolve(name)?;
        image::open(path).map_err(|e| AssetError::Decode {
            name: name.to_owned(),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Logs anything that's missing from disk. Returns how many textures are missing.
    pub fn report(&self) -> usize {
        let mut missing = 0;
        for name in self.names() {
            if let Err(e) = self.resolve(name) {
                warn!("{}", e);
                missing += 1;
            }
        }
        info!(
            "Loaded asset registry from {}: {} of {} textures available",
            self.root.display(),
            self.textures.len() - missing,
            self.textures.len()
        );
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use image::GenericImageView;

    use crate::model::Catalog;

    #[test]
    fn test_missing_directory() {
        let registry = AssetRegistry::standard("definitely/not/a/real/dir");
        assert_eq!(registry.names().count(), 13);
        assert_eq!(registry.report(), 13);
        assert_eq!(
            registry.resolve("earth"),
            Err(AssetError::Missing {
                name: "earth".to_owned(),
                path: PathBuf::from("definitely/not/a/real/dir/earth.jpg"),
            })
        );
        assert_eq!(
            registry.resolve("vulcan"),
            Err(AssetError::Unknown("vulcan".to_owned()))
        );
    }

    #[test]
    fn test_present_texture() {
        let dir = std::env::temp_dir().join(format!("orrery-assets-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("mars.jpg"), b"not really a jpeg").unwrap();

        let registry = AssetRegistry::standard(&dir);
        assert_eq!(registry.resolve("mars"), Ok(dir.join("mars.jpg").as_path()));
        assert!(registry.resolve("venus").is_err());
        assert_eq!(registry.report(), 12);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_undecodable_texture() {
        let dir = std::env::temp_dir().join(format!("orrery-garbage-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("venus.jpg"), b"not really a jpeg").unwrap();
        image::RgbImage::new(4, 4)
            .save(dir.join("saturn_ring.png"))
            .unwrap();

        let registry = AssetRegistry::standard(&dir);
        // Present on disk, so only decoding can catch it
        assert!(registry.resolve("venus").is_ok());
        match registry.load("venus") {
            Err(AssetError::Decode { name, path, .. }) => {
                assert_eq!(name, "venus");
                assert_eq!(path, dir.join("venus.jpg"));
            }
            other => panic!("expected a decode error, got {:?}", other.map(|_| ())),
        }

        let ring = registry.load("saturn_ring").unwrap();
        assert_eq!((ring.width(), ring.height()), (4, 4));
        assert!(matches!(registry.load("earth"), Err(AssetError::Missing { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_catalog_textures_registered() {
        let registry = AssetRegistry::standard("image");
        let names: Vec<_> = registry.names().collect();
        let catalog = Catalog::solar_system();

        assert!(names.contains(&catalog.central().texture));
        for body in catalog.bodies() {
            assert!(names.contains(&body.info.texture));
            if let Some(ring) = &body.info.ring {
                assert!(names.contains(&ring.texture));
            }
        }
    }
}
