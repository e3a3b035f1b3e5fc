use std::path::Path;

use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use orchard::simulation::params::{Params, ParamsLoadError};
use orchard::simulation::world::World;

mod graphics;
mod ui;

#[macroquad::main("Orchard")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params = match load_params() {
        Ok(params) => params,
        Err(err) => {
            error!(%err, "failed to load configuration");
            return;
        }
    };

    let seed = std::env::var("ORCHARD_SEED")
        .ok()
        .and_then(|raw| raw.parse().ok());

    let mut world = match World::new(params, seed) {
        Ok(world) => world,
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    let mut ui_state = ui::UIState::new();

    loop {
        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }
        if ui_state.spawn_person_requested {
            ui_state.spawn_person_requested = false;
            world.spawn_person();
        }

        if !ui_state.paused {
            for _ in 0..ui_state.ticks_per_frame {
                world.tick();
            }
        }
        ui_state.update_history(&world);

        clear_background(DARKGREEN);
        graphics::render(&world);

        ui::draw_ui(&mut ui_state, &world);
        ui::process_egui();

        next_frame().await;
    }
}

/// Resolves the run's parameters: an explicit path argument wins, then an
/// `orchard.json` next to the binary, then the built-in defaults.
fn load_params() -> Result<Params, ParamsLoadError> {
    if let Some(path) = std::env::args().nth(1) {
        info!(%path, "loading configuration");
        return Params::load(Path::new(&path));
    }

    let default_path = Path::new("orchard.json");
    if default_path.exists() {
        info!(path = %default_path.display(), "loading configuration");
        return Params::load(default_path);
    }

    info!("using default configuration");
    Ok(Params::default())
}
