use std::process::ExitCode;

use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;
use log::{error, info};
use nalgebra::Point3;

use orrery_view::config::{Args, Config};
use orrery_view::gui::Simulation;
use orrery_view::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let config: Config = args.into_config()?;
    info!(
        "Opening {}x{} window, textures from {}",
        config.width,
        config.height,
        config.assets.display()
    );

    let mut window = Window::new_with_size("Solar System", config.width, config.height);
    window.set_background_color(0.0, 0.0, 0.0);
    // The sun is the only light source
    window.set_light(Light::Absolute(Point3::origin()));
    window.set_framerate_limit(Some(config.fps));

    let simulation = Simulation::new(&mut window, &config);
    window.render_loop(simulation);
    Ok(())
}
