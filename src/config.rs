use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::model::settings::SPEED_RANGE;
use crate::model::{SettingChange, Settings};

/// Interactive model of the solar system
#[derive(Debug, Parser)]
#[command(name = "orrery-view")]
pub struct Args {
    /// Directory holding the texture images
    #[arg(long, default_value = "image")]
    pub assets: PathBuf,

    /// Initial speed multiplier, between 0 and 20
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Start with the brighter fill light instead of the realistic one
    #[arg(long)]
    pub bright: bool,

    /// Start with orbit paths hidden
    #[arg(long)]
    pub hide_orbits: bool,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Frame-rate limit; all motion is expressed per frame
    #[arg(long, default_value_t = 60)]
    pub fps: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub assets: PathBuf,
    pub settings: Settings,
    pub width: u32,
    pub height: u32,
    pub fps: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("image"),
            settings: Settings::default(),
            width: 1280,
            height: 720,
            fps: 60,
        }
    }
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(ConfigError::SpeedOutOfRange(self.speed));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        let mut settings = Settings::default();
        settings.apply(SettingChange::Speed(self.speed));
        settings.apply(SettingChange::RealView(!self.bright));
        settings.apply(SettingChange::ShowOrbits(!self.hide_orbits));

        Ok(Config {
            assets: self.assets,
            settings,
            width: self.width,
            height: self.height,
            fps: self.fps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let mut argv = vec!["orrery-view"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.assets, PathBuf::from("image"));
        assert_eq!(config.settings, Settings::default());
        assert_eq!((config.width, config.height, config.fps), (1280, 720, 60));
    }

    #[test]
    fn test_flags() {
        let config = parse(&["--speed", "4.5", "--bright", "--hide-orbits", "--assets", "tex"]).unwrap();
        assert_eq!(config.settings.speed(), 4.5);
        assert!(!config.settings.real_view());
        assert!(!config.settings.show_orbits());
        assert_eq!(config.assets, PathBuf::from("tex"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse(&["--speed", "21"]).unwrap_err(),
            ConfigError::SpeedOutOfRange(21.0)
        );
        assert_eq!(
            parse(&["--width", "0"]).unwrap_err(),
            ConfigError::ZeroSize {
                width: 0,
                height: 720
            }
        );
        assert_eq!(parse(&["--fps", "0"]).unwrap_err(), ConfigError::ZeroFrameRate);
    }
}
