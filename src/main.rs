//! DESTINATION EARTH
//!
//! A 2D side-scrolling arcade game: steer the fighter through the asteroid
//! field, collect points, and reach the planet. Built on macroquad, which
//! supplies the window, rendering, input, and audio; this crate is the scene
//! system and the gameplay on top.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod audio;
mod config;
mod game;
mod highscore;
mod scenes;
mod ui;

use std::sync::OnceLock;

use macroquad::prelude::*;

use app::{App, SceneId};
use assets::GameAssets;
use config::GameConfig;
use highscore::HighScoreList;

/// Loaded once and shared between `window_conf` and `main`.
static CONFIG: OnceLock<GameConfig> = OnceLock::new();

fn load_config() -> &'static GameConfig {
    CONFIG.get_or_init(|| GameConfig::load(config::CONFIG_PATH))
}

fn window_conf() -> Conf {
    let config = load_config();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = load_config().clone();

    let assets = match GameAssets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Failed to load game content: {}", e);
            return;
        }
    };

    let high_scores = HighScoreList::load(highscore::DEFAULT_FILE).unwrap_or_else(|e| {
        eprintln!("Failed to open the high score file: {}", e);
        HighScoreList::seeded(highscore::DEFAULT_FILE)
    });

    let mut app = App::new(config, assets, high_scores);

    println!("=== DESTINATION EARTH v{} ===", VERSION);

    loop {
        let dt = get_frame_time();
        let screen = app.screen();

        clear_background(BLACK);

        // Update then draw the one visible scene; collect whatever it asks
        // the app to do.
        let action = match app.active_scene {
            SceneId::Menu => {
                let action = app.menu.update();
                app.menu.draw(&app.assets, screen);
                action
            }
            SceneId::Action => {
                let action = app.action.update(dt, &app.config, &app.assets);
                app.action.draw(&app.assets);
                action
            }
            SceneId::HighScores => {
                let action = app.high_score_screen.update();
                app.high_score_screen.draw(&app.assets);
                action
            }
            SceneId::Help => {
                let action = app.help.update();
                app.help.draw(&app.assets);
                action
            }
            SceneId::About => {
                let action = app.about.update();
                app.about.draw(&app.assets);
                action
            }
            SceneId::GameOver => {
                let action = app.game_over.update();
                app.game_over.draw(&app.assets, screen);
                action
            }
            SceneId::Win => {
                let action = app.win.update();
                app.win.draw(&app.assets, screen);
                action
            }
        };

        if let Some(action) = action {
            app.apply(action);
        }

        if app.should_quit {
            break;
        }

        next_frame().await;
    }
}
