//! Level world state
//!
//! The container for everything alive in the level: the singleton player,
//! the released obstacles and pickups, the planet once it has appeared, the
//! death explosion, and the score meter. The spawner pushes into it, the
//! collision pass mutates it, and the scene draws it.

use macroquad::prelude::Vec2;

use crate::config::GameConfig;

use super::explosion::Explosion;
use super::hud::PointMeter;
use super::objects::{Asteroid, Collidable, ObjectSizes, Planet, PointsObject, SpaceShip};
use super::player::Player;

pub struct World {
    /// The singleton player; `None` once an obstacle has killed them.
    pub player: Option<Player>,

    /// Obstacles currently on screen.
    pub asteroids: Vec<Asteroid>,
    pub ships: Vec<SpaceShip>,

    /// Pickups currently on screen.
    pub points: Vec<PointsObject>,

    /// The level-end goal, present once the spawner has released it.
    pub planet: Option<Planet>,

    /// The death explosion, present between the fatal hit and game over.
    pub explosion: Option<Explosion>,

    /// Score counter shown on the HUD.
    pub meter: PointMeter,
}

impl World {
    /// A fresh world with the player at the start position and nothing
    /// released yet.
    pub fn new(config: &GameConfig, sizes: &ObjectSizes, screen: Vec2) -> Self {
        Self {
            player: Some(Player::new(&config.player, screen, sizes.player)),
            ..Self::empty()
        }
    }

    /// A world with nothing in it, not even the player. Used as the base for
    /// `new` and directly by tests.
    pub fn empty() -> Self {
        Self {
            player: None,
            asteroids: Vec::new(),
            ships: Vec::new(),
            points: Vec::new(),
            planet: None,
            explosion: None,
            meter: PointMeter::new(),
        }
    }

    /// Advance every object one frame.
    pub fn update_objects(&mut self, dt: f32) {
        for asteroid in &mut self.asteroids {
            asteroid.update(dt);
        }
        for ship in &mut self.ships {
            ship.update(dt);
        }
        for points in &mut self.points {
            points.update(dt);
        }
        if let Some(planet) = &mut self.planet {
            planet.update(dt);
        }
    }

    /// Drop every object that has drifted fully past the left edge.
    pub fn remove_off_screen(&mut self) {
        self.asteroids.retain(|a| !a.is_off_screen());
        self.ships.retain(|s| !s.is_off_screen());
        self.points.retain(|p| !p.is_off_screen());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::objects::AsteroidKind;

    #[test]
    fn test_remove_off_screen_keeps_visible_objects() {
        let mut world = World::empty();
        let size = Vec2::new(40.0, 40.0);
        world.asteroids.push(Asteroid::new(
            AsteroidKind::Brown,
            Vec2::new(100.0, 0.0),
            300.0,
            size,
        ));
        world.asteroids.push(Asteroid::new(
            AsteroidKind::Gray,
            Vec2::new(-50.0, 0.0),
            300.0,
            size,
        ));

        world.remove_off_screen();
        assert_eq!(world.asteroids.len(), 1);
        assert_eq!(world.asteroids[0].position.x, 100.0);
    }

    #[test]
    fn test_update_objects_moves_everything() {
        let mut world = World::empty();
        world.points.push(PointsObject::new(
            Vec2::new(400.0, 100.0),
            180.0,
            Vec2::new(16.0, 16.0),
        ));
        world.planet = Some(Planet::new(800.0, 120.0, Vec2::new(200.0, 200.0)));

        world.update_objects(1.0);
        assert_eq!(world.points[0].position.x, 220.0);
        assert_eq!(world.planet.as_ref().unwrap().position.x, 680.0);
    }
}
