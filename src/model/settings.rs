use std::ops::RangeInclusive;

pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=20.0;
pub const DEFAULT_SPEED: f64 = 1.0;

// Realism means a dimmer fill light
pub const AMBIENT_REAL_VIEW: f32 = 0.2;
pub const AMBIENT_BRIGHT_VIEW: f32 = 0.5;

/// The user-adjustable knobs. Exactly one of these exists, owned by the view,
/// and it is only changed through `apply`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    real_view: bool,
    speed: f64,
    show_orbits: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingChange {
    RealView(bool),
    Speed(f64),
    ShowOrbits(bool),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            real_view: true,
            speed: DEFAULT_SPEED,
            show_orbits: true,
        }
    }
}

impl Settings {
    pub fn real_view(&self) -> bool {
        self.real_view
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn ambient_intensity(&self) -> f32 {
        ambient_intensity_for(self.real_view)
    }

    /// Applies the change and returns what actually took effect; speeds are
    /// clamped into `SPEED_RANGE`.
    pub fn apply(&mut self, change: SettingChange) -> SettingChange {
        match change {
            SettingChange::RealView(v) => {
                self.real_view = v;
                SettingChange::RealView(v)
            }
            SettingChange::Speed(s) => {
                let s = clamp_speed(s);
                self.speed = s;
                SettingChange::Speed(s)
            }
            SettingChange::ShowOrbits(v) => {
                self.show_orbits = v;
                SettingChange::ShowOrbits(v)
            }
        }
    }
}

pub fn ambient_intensity_for(real_view: bool) -> f32 {
    if real_view {
        AMBIENT_REAL_VIEW
    } else {
        AMBIENT_BRIGHT_VIEW
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return *SPEED_RANGE.start();
    }
    speed.max(*SPEED_RANGE.start()).min(*SPEED_RANGE.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.real_view());
        assert!(settings.show_orbits());
        assert_eq!(settings.speed(), 1.0);
        assert_eq!(settings.ambient_intensity(), 0.2);
    }

    #[test]
    fn test_real_view_is_inverse() {
        let mut settings = Settings::default();
        settings.apply(SettingChange::RealView(false));
        assert_eq!(settings.ambient_intensity(), 0.5);
        settings.apply(SettingChange::RealView(true));
        assert_eq!(settings.ambient_intensity(), 0.2);
    }

    #[test]
    fn test_speed_clamped() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.apply(SettingChange::Speed(25.0)),
            SettingChange::Speed(20.0)
        );
        assert_eq!(settings.speed(), 20.0);
        assert_eq!(
            settings.apply(SettingChange::Speed(-1.0)),
            SettingChange::Speed(0.0)
        );
        assert_eq!(
            settings.apply(SettingChange::Speed(f64::NAN)),
            SettingChange::Speed(0.0)
        );
        assert_eq!(
            settings.apply(SettingChange::Speed(7.5)),
            SettingChange::Speed(7.5)
        );
    }
}
