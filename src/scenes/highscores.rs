//! High score screen
//!
//! Numbered list of the recorded scores. The lines are refreshed from the
//! score list whenever the app shows this scene, so a freshly saved score is
//! always visible.

use macroquad::prelude::*;

use crate::app::{SceneAction, SceneId};
use crate::assets::GameAssets;
use crate::highscore::HighScoreList;
use crate::ui;

const PADDING_WIDTH: f32 = 100.0;
const PADDING_HEIGHT: f32 = 10.0;

pub struct HighScoreScreen {
    lines: Vec<String>,
}

impl HighScoreScreen {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild the displayed lines from the current scores.
    pub fn refresh(&mut self, scores: &HighScoreList) {
        self.lines = scores
            .scores()
            .iter()
            .enumerate()
            .map(|(rank, score)| format!("{}.    {}", rank + 1, score))
            .collect();
    }

    pub fn update(&mut self) -> Option<SceneAction> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(SceneAction::Switch(SceneId::Menu));
        }
        None
    }

    pub fn draw(&self, assets: &GameAssets) {
        let mut position = Vec2::new(PADDING_WIDTH, PADDING_HEIGHT);

        ui::draw_label(
            "High Scores",
            &assets.font,
            position,
            ui::FONT_SIZE,
            ui::HIGHLIGHT_COLOR,
        );
        position.y += ui::LINE_SPACING;

        for line in &self.lines {
            ui::draw_label(line, &assets.font, position, ui::FONT_SIZE, ui::REGULAR_COLOR);
            position.y += ui::LINE_SPACING;
        }

        ui::draw_label(
            "Press 'Escape' to return to Main Menu",
            &assets.font,
            position,
            ui::FONT_SIZE,
            ui::HIGHLIGHT_COLOR,
        );
    }
}
