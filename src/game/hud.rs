//! Score meter
//!
//! Tracks the player's score for the level and draws it in the top-left
//! corner of the screen.

use macroquad::prelude::*;

use crate::ui;

pub struct PointMeter {
    pub score: u32,
    position: Vec2,
}

impl PointMeter {
    pub fn new() -> Self {
        Self {
            score: 0,
            position: Vec2::new(8.0, 8.0),
        }
    }

    pub fn draw(&self, font: &Font) {
        ui::draw_label(
            &format!("Score: {}", self.score),
            font,
            self.position,
            ui::FONT_SIZE,
            ui::REGULAR_COLOR,
        );
    }
}

impl Default for PointMeter {
    fn default() -> Self {
        Self::new()
    }
}
