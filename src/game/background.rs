//! Scrolling space background
//!
//! Two screen-sized tiles drawn back to back, drifting left. When the first
//! tile has fully left the screen it is moved to the right end of the other,
//! so the scroll never shows a gap.

use macroquad::prelude::*;

use crate::assets::GameAssets;

pub struct Background {
    tiles: [Rect; 2],
    speed: f32,
}

impl Background {
    pub fn new(screen: Vec2, speed: f32) -> Self {
        Self {
            tiles: [
                Rect::new(0.0, 0.0, screen.x, screen.y),
                Rect::new(screen.x, 0.0, screen.x, screen.y),
            ],
            speed,
        }
    }

    pub fn update(&mut self, dt: f32) {
        for tile in &mut self.tiles {
            tile.x -= self.speed * dt;
        }

        // Recycle the leading tile once its right edge passes the left side.
        if self.tiles[0].x + self.tiles[0].w <= 0.0 {
            self.tiles[0].x = self.tiles[1].x + self.tiles[1].w;
            self.tiles.swap(0, 1);
        }
    }

    pub fn draw(&self, assets: &GameAssets) {
        for tile in &self.tiles {
            draw_texture_ex(
                &assets.background,
                tile.x,
                tile.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(tile.w, tile.h)),
                    ..Default::default()
                },
            );
        }
    }
}
