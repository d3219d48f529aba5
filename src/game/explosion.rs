//! The death explosion
//!
//! A sprite-sheet animation played where the player died, with the explosion
//! sound effect fired once when it appears. When the last frame has played
//! the level is over, signalled through `explosion_finished`.

use macroquad::audio::{play_sound, PlaySoundParams};
use macroquad::prelude::*;

use crate::assets::GameAssets;

use super::event::{ExplosionFinishedEvent, GameEvents};

/// Frames in the explosion sheet, laid out in a single row.
const FRAME_COUNT: usize = 12;

/// Width and height of one frame in the sheet, in pixels.
const FRAME_SIZE: f32 = 96.0;

/// Seconds each frame is held.
const FRAME_DURATION: f32 = 0.1;

pub struct Explosion {
    position: Vec2,
    current_frame: usize,
    frame_timer: f32,
    finished: bool,
}

impl Explosion {
    /// Start an explosion at `position` and fire the sound effect once.
    pub fn spawn(position: Vec2, assets: &GameAssets, sfx_volume: f32) -> Self {
        if let Some(sfx) = &assets.explosion_sfx {
            play_sound(
                sfx,
                PlaySoundParams {
                    looped: false,
                    volume: sfx_volume,
                },
            );
        }

        Self {
            position,
            current_frame: 0,
            frame_timer: 0.0,
            finished: false,
        }
    }

    /// Construct without touching the audio backend. Used by tests.
    #[cfg(test)]
    fn silent(position: Vec2) -> Self {
        Self {
            position,
            current_frame: 0,
            frame_timer: 0.0,
            finished: false,
        }
    }

    /// Advance the animation; queues `explosion_finished` once after the
    /// last frame has played out.
    pub fn update(&mut self, dt: f32, events: &mut GameEvents) {
        if self.finished {
            return;
        }

        self.frame_timer += dt;
        if self.frame_timer >= FRAME_DURATION {
            self.current_frame += 1;
            self.frame_timer = 0.0;
        }

        if self.current_frame >= FRAME_COUNT {
            self.finished = true;
            events.explosion_finished.send(ExplosionFinishedEvent);
        }
    }

    pub fn draw(&self, assets: &GameAssets) {
        let frame = self.current_frame.min(FRAME_COUNT - 1);
        let source = Rect::new(frame as f32 * FRAME_SIZE, 0.0, FRAME_SIZE, FRAME_SIZE);

        draw_texture_ex(
            &assets.explosion,
            self.position.x,
            self.position.y,
            WHITE,
            DrawTextureParams {
                source: Some(source),
                ..Default::default()
            },
        );
    }
}
