//! The player ship
//!
//! Keyboard-moved, clamped to the screen, animated by cycling through the
//! fighter frame textures. Input is gathered into a direction vector in one
//! place and applied by a pure step function, so movement and clamping are
//! testable without the input backend.

use macroquad::prelude::*;

use crate::assets::GameAssets;
use crate::config::PlayerConfig;

/// Number of animation frames in the fighter sprite sequence.
pub const FRAME_COUNT: usize = 20;

/// The player ship. At most one exists at a time; the action scene holds it
/// in an `Option` and collision resolution removes it on death.
pub struct Player {
    position: Vec2,
    size: Vec2,
    speed: f32,
    frame_duration: f32,
    current_frame: usize,
    frame_timer: f32,
}

impl Player {
    /// Create the player at the level start position: a quarter of the way
    /// in from the left, vertically centered.
    pub fn new(config: &PlayerConfig, screen: Vec2, size: Vec2) -> Self {
        Self {
            position: Vec2::new(screen.x / 4.0, screen.y / 2.0),
            size,
            speed: config.speed,
            frame_duration: config.frame_duration,
            current_frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Poll the arrow keys and advance one frame of movement and animation.
    pub fn update(&mut self, dt: f32, screen: Vec2) {
        let direction = read_move_direction();
        self.step(direction, dt, screen);
    }

    /// Apply one frame of movement, animation, and screen clamping.
    pub fn step(&mut self, direction: Vec2, dt: f32, screen: Vec2) {
        self.position += direction * self.speed * dt;

        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.current_frame += 1;
            self.frame_timer = 0.0;
        }
        if self.current_frame >= FRAME_COUNT {
            self.current_frame = 0;
        }

        self.position.x = self.position.x.clamp(0.0, screen.x - self.size.x);
        self.position.y = self.position.y.clamp(0.0, screen.y - self.size.y);
    }

    /// Rectangle boundary used for collision checks against obstacles.
    pub fn hit_box(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn draw(&self, assets: &GameAssets) {
        draw_texture(
            assets.player_frame(self.current_frame),
            self.position.x,
            self.position.y,
            WHITE,
        );
    }
}

/// Arrow-key movement direction. Up wins over Down and Left over Right when
/// both are held; diagonals are not normalized.
fn read_move_direction() -> Vec2 {
    let mut direction = Vec2::ZERO;

    if is_key_down(KeyCode::Up) {
        direction.y = -1.0;
    } else if is_key_down(KeyCode::Down) {
        direction.y = 1.0;
    }

    if is_key_down(KeyCode::Left) {
        direction.x = -1.0;
    } else if is_key_down(KeyCode::Right) {
        direction.x = 1.0;
    }

    direction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player::new(
            &PlayerConfig::default(),
            Vec2::new(800.0, 480.0),
            Vec2::new(64.0, 32.0),
        )
    }

    #[test]
    fn test_starts_quarter_in_and_centered() {
        let player = test_player();
        assert_eq!(player.position(), Vec2::new(200.0, 240.0));
    }

    #[test]
    fn test_moves_by_speed_times_dt() {
        let mut player = test_player();
        let start = player.position();
        player.step(Vec2::new(1.0, 0.0), 0.1, Vec2::new(800.0, 480.0));
        assert_eq!(player.position().x, start.x + 24.0);
    }

    #[test]
    fn test_clamped_to_screen_edges() {
        let screen = Vec2::new(800.0, 480.0);
        let mut player = test_player();

        // Push hard into the top-left corner.
        for _ in 0..100 {
            player.step(Vec2::new(-1.0, -1.0), 0.1, screen);
        }
        assert_eq!(player.position(), Vec2::ZERO);

        // And into the bottom-right: clamp leaves the ship fully on screen.
        for _ in 0..100 {
            player.step(Vec2::new(1.0, 1.0), 0.1, screen);
        }
        assert_eq!(player.position(), Vec2::new(800.0 - 64.0, 480.0 - 32.0));
    }

    #[test]
    fn test_animation_advances_and_wraps() {
        let screen = Vec2::new(800.0, 480.0);
        let mut player = test_player();
        assert_eq!(player.current_frame(), 0);

        // One frame duration advances the animation by one frame.
        player.step(Vec2::ZERO, 0.1, screen);
        assert_eq!(player.current_frame(), 1);

        // Stepping through a full cycle wraps back to frame zero.
        for _ in 0..FRAME_COUNT {
            player.step(Vec2::ZERO, 0.1, screen);
        }
        assert_eq!(player.current_frame(), 1);
    }
}
