//! Game over screen
//!
//! Shown after the death explosion has played out. The level itself has
//! already been reset by then; this screen only offers the way back.

use macroquad::prelude::*;

use crate::app::SceneAction;
use crate::assets::GameAssets;
use crate::ui::{self, MenuList};

pub struct GameOverScreen {
    list: MenuList,
}

impl GameOverScreen {
    pub fn new() -> Self {
        Self {
            list: MenuList::new(vec!["Back to Main Menu", "Quit"]),
        }
    }

    pub fn update(&mut self) -> Option<SceneAction> {
        let selected = self.list.update()?;
        let action = match selected {
            0 => SceneAction::BackToMenu,
            _ => SceneAction::Quit,
        };
        Some(action)
    }

    pub fn draw(&self, assets: &GameAssets, screen: Vec2) {
        let origin = Vec2::new(screen.x / 2.0, screen.y / 2.0);

        ui::draw_label(
            "You died.",
            &assets.font,
            origin,
            ui::FONT_SIZE,
            ui::REGULAR_COLOR,
        );

        self.list.draw(
            &assets.font,
            origin + Vec2::new(0.0, ui::LINE_SPACING * 2.0),
        );
    }
}
