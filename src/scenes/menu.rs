//! Main menu

use macroquad::prelude::*;

use crate::app::{SceneAction, SceneId};
use crate::assets::GameAssets;
use crate::ui::{self, MenuList};

const TITLE: &str = "DESTINATION EARTH";
const TITLE_PADDING: f32 = 50.0;

pub struct MenuScreen {
    list: MenuList,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            list: MenuList::new(vec![
                "Start Game",
                "High Scores",
                "Help",
                "About",
                "Quit",
            ]),
        }
    }

    pub fn update(&mut self) -> Option<SceneAction> {
        let selected = self.list.update()?;
        let action = match selected {
            0 => SceneAction::StartGame,
            1 => SceneAction::Switch(SceneId::HighScores),
            2 => SceneAction::Switch(SceneId::Help),
            3 => SceneAction::Switch(SceneId::About),
            _ => SceneAction::Quit,
        };
        Some(action)
    }

    pub fn draw(&self, assets: &GameAssets, screen: Vec2) {
        ui::draw_label(
            TITLE,
            &assets.font,
            Vec2::new(TITLE_PADDING, TITLE_PADDING),
            ui::FONT_SIZE,
            ui::REGULAR_COLOR,
        );

        self.list
            .draw(&assets.font, Vec2::new(screen.x / 2.0, screen.y / 2.0));
    }
}
