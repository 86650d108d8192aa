mod error;
mod frame;
mod settings;
mod world;

use std::path::Path;
use std::process::ExitCode;

use backend::System;

use crate::error::Result;
use crate::settings::{Settings, SETTINGS_FILE};
use crate::world::World;

fn run() -> Result<()> {
    let settings = Settings::load(Path::new(SETTINGS_FILE))?;

    let mut system = System::new(&settings.title, settings.width, settings.height)?;
    system.screen.set_frame_rate(settings.frame_rate);

    // dropped before `system`, while the GL context is still alive
    let texture = system.screen.load_texture(&settings.texture)?;

    let mut world = World::new(settings.actor_rect(), settings.boundary_rect(), settings.step);
    let frames = frame::run(
        &mut system.input,
        &mut system.screen,
        &texture,
        &mut world,
        &settings.palette(),
    );

    log::info!("shutting down after {frames} frame(s)");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
