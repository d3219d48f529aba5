//! Space object generator
//!
//! Controls the creation, placement, speed, and release of all obstacles and
//! point objects. Each object type has a fixed-size pool rolled up front with
//! random positions, speeds, and kinds, an index of the next object to
//! release, and an interval timer deciding when to release it. The planet is
//! a single object released once the asteroid pool runs out.

use macroquad::prelude::Vec2;
use rand::Rng;

use crate::config::SpawnerConfig;

use super::objects::{Asteroid, AsteroidKind, ObjectSizes, Planet, PointsObject, ShipKind, SpaceShip};
use super::world::World;

pub struct SpaceObjectGenerator {
    config: SpawnerConfig,

    asteroids: Vec<Asteroid>,
    asteroid_index: usize,
    asteroid_timer: f32,

    points: Vec<PointsObject>,
    point_index: usize,
    point_timer: f32,

    ships: Vec<SpaceShip>,
    ship_index: usize,
    ship_timer: f32,

    /// Taken when released; `None` afterwards.
    planet: Option<Planet>,
}

impl SpaceObjectGenerator {
    /// Roll all the pools for a fresh level.
    pub fn new<R: Rng>(
        config: &SpawnerConfig,
        sizes: &ObjectSizes,
        screen: Vec2,
        rng: &mut R,
    ) -> Self {
        let asteroids = (0..config.asteroid_count)
            .map(|_| {
                let kind = AsteroidKind::ALL[rng.gen_range(0..AsteroidKind::ALL.len())];
                Asteroid::new(
                    kind,
                    random_position(config, screen, rng),
                    random_obstacle_speed(config, rng),
                    sizes.asteroids[kind.index()],
                )
            })
            .collect();

        let points = (0..config.point_count)
            .map(|_| {
                PointsObject::new(
                    random_position(config, screen, rng),
                    config.point_speed,
                    sizes.points,
                )
            })
            .collect();

        let ships = (0..config.ship_count)
            .map(|_| {
                let kind = ShipKind::ALL[rng.gen_range(0..ShipKind::ALL.len())];
                SpaceShip::new(
                    kind,
                    random_position(config, screen, rng),
                    random_obstacle_speed(config, rng),
                    sizes.ships[kind.index()],
                )
            })
            .collect();

        Self {
            config: config.clone(),
            asteroids,
            asteroid_index: 0,
            asteroid_timer: 0.0,
            points,
            point_index: 0,
            point_timer: 0.0,
            ships,
            ship_index: 0,
            ship_timer: 0.0,
            planet: Some(Planet::new(screen.x, config.planet_speed, sizes.planet)),
        }
    }

    /// Advance the interval timers and release any objects that are due
    /// into the world.
    pub fn update(&mut self, dt: f32, world: &mut World) {
        self.asteroid_timer += dt;
        if self.asteroid_index < self.asteroids.len()
            && self.asteroid_timer >= self.config.asteroid_interval
        {
            world.asteroids.push(self.asteroids[self.asteroid_index].clone());
            self.asteroid_index += 1;
            self.asteroid_timer = 0.0;
        }

        self.point_timer += dt;
        if self.point_index < self.points.len() && self.point_timer >= self.config.point_interval {
            world.points.push(self.points[self.point_index].clone());
            self.point_index += 1;
            self.point_timer = 0.0;
        }

        self.ship_timer += dt;
        if self.ship_index < self.ships.len() && self.ship_timer >= self.config.ship_interval {
            world.ships.push(self.ships[self.ship_index].clone());
            self.ship_index += 1;
            self.ship_timer = 0.0;
        }

        // Once the asteroids have all been released, the planet follows.
        if self.asteroid_index >= self.asteroids.len() {
            if let Some(planet) = self.planet.take() {
                world.planet = Some(planet);
            }
        }
    }

    /// Number of asteroids still waiting in the pool.
    pub fn asteroids_remaining(&self) -> usize {
        self.asteroids.len() - self.asteroid_index
    }
}

/// Spawn position: just past the right edge, at a random row that keeps the
/// tallest object fully on screen.
fn random_position<R: Rng>(config: &SpawnerConfig, screen: Vec2, rng: &mut R) -> Vec2 {
    Vec2::new(
        screen.x,
        rng.gen_range(0.0..screen.y - config.max_object_height),
    )
}

fn random_obstacle_speed<R: Rng>(config: &SpawnerConfig, rng: &mut R) -> f32 {
    rng.gen_range(config.obstacle_speed_min..config.obstacle_speed_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_sizes() -> ObjectSizes {
        ObjectSizes {
            player: Vec2::new(64.0, 32.0),
            asteroids: [
                Vec2::new(40.0, 40.0),
                Vec2::new(48.0, 48.0),
                Vec2::new(32.0, 32.0),
                Vec2::new(30.0, 30.0),
            ],
            ships: [Vec2::new(80.0, 40.0), Vec2::new(70.0, 35.0)],
            points: Vec2::new(16.0, 16.0),
            planet: Vec2::new(200.0, 200.0),
        }
    }

    fn test_generator(config: &SpawnerConfig, seed: u64) -> SpaceObjectGenerator {
        let mut rng = StdRng::seed_from_u64(seed);
        SpaceObjectGenerator::new(config, &test_sizes(), Vec2::new(800.0, 480.0), &mut rng)
    }

    #[test]
    fn test_nothing_released_before_interval() {
        let config = SpawnerConfig::default();
        let mut generator = test_generator(&config, 1);
        let mut world = World::empty();

        generator.update(0.5, &mut world);
        assert!(world.asteroids.is_empty());
        assert!(world.points.is_empty());
        assert!(world.ships.is_empty());
        assert!(world.planet.is_none());
    }

    #[test]
    fn test_release_on_interval() {
        let config = SpawnerConfig::default();
        let mut generator = test_generator(&config, 1);
        let mut world = World::empty();

        // 0.7s elapsed: exactly one asteroid, nothing else yet.
        generator.update(0.7, &mut world);
        assert_eq!(world.asteroids.len(), 1);
        assert!(world.points.is_empty());

        // 0.3s more: the point interval (1.0s total) has elapsed too.
        generator.update(0.3, &mut world);
        assert_eq!(world.points.len(), 1);
    }

    #[test]
    fn test_one_release_per_interval_per_type() {
        // Intervals and step chosen exactly representable in binary so the
        // timer arithmetic is exact.
        let config = SpawnerConfig {
            asteroid_interval: 0.75,
            point_interval: 1.0,
            ship_interval: 4.0,
            ..SpawnerConfig::default()
        };
        let mut generator = test_generator(&config, 2);
        let mut world = World::empty();

        // Twelve seconds in 0.25s steps. Timers reset on release, so one
        // asteroid every 3 steps, one point every 4, one ship every 16.
        for _ in 0..48 {
            generator.update(0.25, &mut world);
        }
        assert_eq!(world.asteroids.len(), 16);
        assert_eq!(world.points.len(), 12);
        assert_eq!(world.ships.len(), 3);
        assert!(world.planet.is_none());
    }

    #[test]
    fn test_pool_exhaustion_stops_releases() {
        let config = SpawnerConfig {
            asteroid_count: 2,
            point_count: 1,
            ship_count: 1,
            ..SpawnerConfig::default()
        };
        let mut generator = test_generator(&config, 3);
        let mut world = World::empty();

        for _ in 0..100 {
            generator.update(1.0, &mut world);
        }
        assert_eq!(world.asteroids.len(), 2);
        assert_eq!(world.points.len(), 1);
        assert_eq!(world.ships.len(), 1);
        assert_eq!(generator.asteroids_remaining(), 0);
    }

    #[test]
    fn test_planet_released_after_last_asteroid() {
        let config = SpawnerConfig {
            asteroid_count: 3,
            point_count: 0,
            ship_count: 0,
            ..SpawnerConfig::default()
        };
        let mut generator = test_generator(&config, 4);
        let mut world = World::empty();

        // Two asteroids out: no planet yet.
        generator.update(0.7, &mut world);
        generator.update(0.7, &mut world);
        assert_eq!(world.asteroids.len(), 2);
        assert!(world.planet.is_none());

        // Third and final asteroid: planet follows in the same update.
        generator.update(0.7, &mut world);
        assert_eq!(world.asteroids.len(), 3);
        assert!(world.planet.is_some());

        // And only once.
        world.planet = None;
        generator.update(0.7, &mut world);
        assert!(world.planet.is_none());
    }

    #[test]
    fn test_releases_follow_pool_order() {
        let config = SpawnerConfig {
            asteroid_count: 5,
            point_count: 0,
            ship_count: 0,
            ..SpawnerConfig::default()
        };
        let mut generator = test_generator(&config, 5);
        let pool: Vec<Vec2> = generator.asteroids.iter().map(|a| a.position).collect();

        let mut world = World::empty();
        for _ in 0..5 {
            generator.update(0.7, &mut world);
        }
        let released: Vec<Vec2> = world.asteroids.iter().map(|a| a.position).collect();
        assert_eq!(released, pool);
    }

    #[test]
    fn test_spawn_positions_within_bounds() {
        let config = SpawnerConfig::default();
        let generator = test_generator(&config, 6);

        for asteroid in &generator.asteroids {
            assert_eq!(asteroid.position.x, 800.0);
            assert!(asteroid.position.y >= 0.0);
            assert!(asteroid.position.y < 480.0 - config.max_object_height);
        }
        for ship in &generator.ships {
            assert!(ship.speed >= config.obstacle_speed_min);
            assert!(ship.speed < config.obstacle_speed_max);
        }
    }

    #[test]
    fn test_same_seed_rolls_identical_pools() {
        let config = SpawnerConfig::default();
        let a = test_generator(&config, 7);
        let b = test_generator(&config, 7);

        let positions_a: Vec<Vec2> = a.asteroids.iter().map(|x| x.position).collect();
        let positions_b: Vec<Vec2> = b.asteroids.iter().map(|x| x.position).collect();
        assert_eq!(positions_a, positions_b);
    }
}
