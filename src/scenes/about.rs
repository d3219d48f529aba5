//! About screen
//!
//! A full-screen image crediting the game's authors.

use macroquad::prelude::*;

use crate::app::{SceneAction, SceneId};
use crate::assets::GameAssets;

pub struct AboutScreen;

impl AboutScreen {
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
        draw_texture(&assets.about_screen, 0.0, 0.0, WHITE);
    }
}
