use approx::assert_relative_eq;

use orrery_view::config::Config;
use orrery_view::gui::state::ViewState;
use orrery_view::model::settings::{AMBIENT_BRIGHT_VIEW, AMBIENT_REAL_VIEW};
use orrery_view::model::{Catalog, SettingChange, SolarSystem};

#[test]
fn test_angles_accumulate_per_frame() {
    let mut system = SolarSystem::new(Catalog::solar_system());
    let frames = 250;
    let speed = 3.0;
    for _ in 0..frames {
        system.step(speed);
    }

    assert_eq!(system.frame_count(), frames);
    for body in system.bodies() {
        let state = system.state(body.id).unwrap();
        let n = frames as f64 * speed;
        assert_relative_eq!(state.orbit_angle, n * body.info.orbit_speed, epsilon = 1e-9);
        assert_relative_eq!(state.spin_angle, n * body.info.spin_speed, epsilon = 1e-9);
    }
    assert_relative_eq!(
        system.central_spin(),
        frames as f64 * speed * system.catalog().central().spin_speed,
        epsilon = 1e-9
    );
}

#[test]
fn test_zero_speed_freezes_everything() {
    let mut state = ViewState::new(&Config::default());
    state.advance();
    let before: Vec<_> = state
        .system()
        .bodies()
        .map(|b| state.system().state(b.id).unwrap())
        .collect();
    let sun_before = state.system().central_spin();

    state.change_setting(SettingChange::Speed(0.0));
    for _ in 0..100 {
        state.advance();
    }

    let after: Vec<_> = state
        .system()
        .bodies()
        .map(|b| state.system().state(b.id).unwrap())
        .collect();
    assert_eq!(before, after);
    assert_eq!(sun_before, state.system().central_spin());
}

#[test]
fn test_bodies_keep_their_distance() {
    let mut system = SolarSystem::new(Catalog::solar_system());
    for _ in 0..777 {
        system.step(7.5);
    }

    for body in system.bodies() {
        let position = system.body_position(body.id).unwrap();
        assert_relative_eq!(position.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            position.coords.norm(),
            body.info.orbital_distance as f64,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_orbit_toggle_and_ambient() {
    let mut state = ViewState::new(&Config::default());
    assert!(state.settings().real_view());
    assert_eq!(state.settings().ambient_intensity(), AMBIENT_REAL_VIEW);
    assert!(state.orbit_paths().iter().all(|p| p.is_visible()));

    state.change_setting(SettingChange::RealView(false));
    assert_eq!(state.settings().ambient_intensity(), AMBIENT_BRIGHT_VIEW);
    state.change_setting(SettingChange::RealView(true));
    assert_eq!(state.settings().ambient_intensity(), AMBIENT_REAL_VIEW);

    state.change_setting(SettingChange::ShowOrbits(false));
    assert!(state.orbit_paths().iter().all(|p| !p.is_visible()));
    state.change_setting(SettingChange::ShowOrbits(true));
    assert!(state.orbit_paths().iter().all(|p| p.is_visible()));
}

#[test]
fn test_orbit_paths_match_distances() {
    let state = ViewState::new(&Config::default());
    let catalog = state.system().catalog();

    assert_eq!(state.orbit_paths().len(), catalog.len());
    for path in state.orbit_paths().iter() {
        let body = catalog.get(path.body()).unwrap();
        assert_eq!(path.points().len(), 101);
        for point in path.points() {
            assert_relative_eq!(point.y, 0.0);
            assert_relative_eq!(
                point.coords.norm(),
                body.info.orbital_distance,
                max_relative = 1e-5
            );
        }
    }
}

#[test]
fn test_resize_leaves_motion_alone() {
    let mut state = ViewState::new(&Config::default());
    for _ in 0..10 {
        state.advance();
    }
    let earth = state.system().catalog().find_by_name("Earth").unwrap().id;
    let before = state.system().state(earth).unwrap();

    state.resize(1000, 500);
    assert_eq!(state.viewport().size(), (1000, 500));
    assert_relative_eq!(state.camera().aspect(), 2.0);
    assert_eq!(state.system().state(earth).unwrap(), before);

    // A minimized window reports zero; nothing changes
    state.resize(0, 0);
    assert_eq!(state.viewport().size(), (1000, 500));
    assert_relative_eq!(state.camera().aspect(), 2.0);
}
