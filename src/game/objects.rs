//! Space objects
//!
//! The obstacles and pickups that drift across the screen: asteroids and
//! space ships kill the player, point objects are collected for score, and
//! the planet at the end of the level wins it. All of them are flat structs
//! (kind, position, speed, size) that move left each frame and report their
//! hit box through the `Collidable` trait.

use macroquad::prelude::{Rect, Vec2};

/// Contract for everything the player can collide with.
pub trait Collidable {
    /// Rectangle boundary used for collision checks against the player.
    fn hit_box(&self) -> Rect;

    /// Whether the object has fully left the screen on the left edge
    /// and should be removed.
    fn is_off_screen(&self) -> bool;
}

/// The four asteroid variants, each with its own texture and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidKind {
    Brown,
    Gray,
    Dark,
    Square,
}

impl AsteroidKind {
    pub const ALL: [AsteroidKind; 4] = [
        AsteroidKind::Brown,
        AsteroidKind::Gray,
        AsteroidKind::Dark,
        AsteroidKind::Square,
    ];

    /// Index into per-kind texture/size tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The two space ship variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipKind {
    Destroyer,
    Cruiser,
}

impl ShipKind {
    pub const ALL: [ShipKind; 2] = [ShipKind::Destroyer, ShipKind::Cruiser];

    /// Index into per-kind texture/size tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Pixel sizes of every object texture, captured once from the loaded
/// content so game logic and tests never need live textures.
#[derive(Debug, Clone)]
pub struct ObjectSizes {
    pub player: Vec2,
    pub asteroids: [Vec2; 4],
    pub ships: [Vec2; 2],
    pub points: Vec2,
    pub planet: Vec2,
}

/// An obstacle the player must avoid. Colliding with it kills the player.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub kind: AsteroidKind,
    pub position: Vec2,
    pub speed: f32,
    pub size: Vec2,
}

impl Asteroid {
    pub fn new(kind: AsteroidKind, position: Vec2, speed: f32, size: Vec2) -> Self {
        Self {
            kind,
            position,
            speed,
            size,
        }
    }

    /// Drift left by `speed` pixels per second.
    pub fn update(&mut self, dt: f32) {
        self.position.x -= self.speed * dt;
    }
}

impl Collidable for Asteroid {
    fn hit_box(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    fn is_off_screen(&self) -> bool {
        self.position.x + self.size.x < 0.0
    }
}

/// An obstacle the player must avoid. Colliding with it kills the player.
#[derive(Debug, Clone)]
pub struct SpaceShip {
    pub kind: ShipKind,
    pub position: Vec2,
    pub speed: f32,
    pub size: Vec2,
}

impl SpaceShip {
    pub fn new(kind: ShipKind, position: Vec2, speed: f32, size: Vec2) -> Self {
        Self {
            kind,
            position,
            speed,
            size,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.position.x -= self.speed * dt;
    }
}

impl Collidable for SpaceShip {
    fn hit_box(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    fn is_off_screen(&self) -> bool {
        self.position.x + self.size.x < 0.0
    }
}

/// A pickup worth one point when the player touches it.
#[derive(Debug, Clone)]
pub struct PointsObject {
    pub position: Vec2,
    pub speed: f32,
    pub size: Vec2,
}

impl PointsObject {
    pub fn new(position: Vec2, speed: f32, size: Vec2) -> Self {
        Self {
            position,
            speed,
            size,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.position.x -= self.speed * dt;
    }
}

impl Collidable for PointsObject {
    fn hit_box(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    fn is_off_screen(&self) -> bool {
        self.position.x + self.size.x < 0.0
    }
}

/// The goal at the end of the level. Touching it wins the game.
///
/// The planet drifts slowly and is never removed off-screen; once released
/// it stays until the level ends one way or the other.
#[derive(Debug, Clone)]
pub struct Planet {
    pub position: Vec2,
    pub speed: f32,
    pub size: Vec2,
}

impl Planet {
    /// The planet enters at the top-right corner of the screen.
    pub fn new(screen_width: f32, speed: f32, size: Vec2) -> Self {
        Self {
            position: Vec2::new(screen_width, 0.0),
            speed,
            size,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.position.x -= self.speed * dt;
    }
}

impl Collidable for Planet {
    fn hit_box(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    fn is_off_screen(&self) -> bool {
        false
    }
}
