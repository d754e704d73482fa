use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Speed multiplier {0} is outside of [0, 20]")]
    SpeedOutOfRange(f64),
    #[error("Window size must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("Frame-rate limit must be non-zero")]
    ZeroFrameRate,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AssetError {
    #[error("Texture '{name}' not found at {}", path.display())]
    Missing { name: String, path: PathBuf },
    #[error("No texture registered under '{0}'")]
    Unknown(String),
    #[error("Texture '{name}' at {} could not be decoded: {reason}", path.display())]
    Decode {
        name: String,
        path: PathBuf,
        reason: String,
    },
}
