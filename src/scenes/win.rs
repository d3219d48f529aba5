//! Win screen
//!
//! Shown when the player reaches the planet. Displays the final score and
//! saves it to the high score file when Enter is pressed.

use macroquad::prelude::*;

use crate::app::SceneAction;
use crate::assets::GameAssets;
use crate::ui;

pub struct WinScreen {
    score: u32,
}

impl WinScreen {
    pub fn new() -> Self {
        Self { score: 0 }
    }

    /// Record the final score to display and save. Called when the app
    /// switches to this scene.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn update(&mut self) -> Option<SceneAction> {
        if is_key_pressed(KeyCode::Enter) {
            return Some(SceneAction::SaveScore { score: self.score });
        }
        None
    }

    pub fn draw(&self, assets: &GameAssets, screen: Vec2) {
        let origin = Vec2::new(screen.x / 2.0, screen.y / 2.0);

        ui::draw_label(
            "Congratulations! You win!",
            &assets.font,
            origin,
            ui::FONT_SIZE,
            ui::REGULAR_COLOR,
        );
        ui::draw_label(
            &format!("Score: {}", self.score),
            &assets.font,
            origin + Vec2::new(0.0, ui::LINE_SPACING),
            ui::FONT_SIZE,
            ui::REGULAR_COLOR,
        );
        ui::draw_label(
            "Press 'Enter' to save your score",
            &assets.font,
            origin + Vec2::new(0.0, ui::LINE_SPACING * 3.0),
            ui::FONT_SIZE,
            ui::HIGHLIGHT_COLOR,
        );
    }
}
