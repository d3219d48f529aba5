//! Help screen
//!
//! A full-screen image explaining the game and its controls.

use macroquad::prelude::*;

use crate::app::{SceneAction, SceneId};
use crate::assets::GameAssets;

pub struct HelpScreen;

impl HelpScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self) -> Option<SceneAction> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(SceneAction::Switch(SceneId::Menu));
        }
        None
    }

    pub fn draw(&self, assets: &GameAssets) {
        draw_texture(&assets.help_screen, 0.0, 0.0, WHITE);
    }
}
