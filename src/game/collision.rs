//! Collision resolution
//!
//! One pass per frame: every live object's hit box is tested against the
//! singleton player's with an axis-aligned rectangle overlap. Obstacles kill
//! the player (first hit wins and removes them, so nothing else can collide
//! this frame), pickups are consumed for score, and the planet ends the
//! level. Outcomes are queued on `GameEvents`; the scene decides what they
//! mean.

use macroquad::prelude::{Rect, Vec2};

use super::event::{GameEvents, PlanetReachedEvent, PlayerHitEvent, PointCollectedEvent};
use super::objects::Collidable;
use super::world::World;

/// Run the collision pass for one frame.
pub fn run(world: &mut World, events: &mut GameEvents) {
    let player_box = match &world.player {
        Some(player) => player.hit_box(),
        None => return,
    };

    // Obstacles: the first overlap kills the player.
    let fatal_hit = world
        .asteroids
        .iter()
        .map(|a| a.hit_box())
        .chain(world.ships.iter().map(|s| s.hit_box()))
        .any(|hit_box| hit_box.overlaps(&player_box));

    if fatal_hit {
        events.player_hit.send(PlayerHitEvent {
            at: rect_center(&player_box),
        });
        world.player = None;
        return;
    }

    // Pickups: consume every overlapping point object.
    world.points.retain(|points| {
        if points.hit_box().overlaps(&player_box) {
            events.point_collected.send(PointCollectedEvent);
            false
        } else {
            true
        }
    });

    // The planet ends the level. It updates after everything else, matching
    // its place at the end of the component list.
    if let Some(planet) = &world.planet {
        if planet.hit_box().overlaps(&player_box) {
            events.planet_reached.send(PlanetReachedEvent);
            world.player = None;
        }
    }
}

fn rect_center(rect: &Rect) -> Vec2 {
    Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::objects::{Asteroid, AsteroidKind, ObjectSizes, Planet, PointsObject};

    fn test_sizes() -> ObjectSizes {
        ObjectSizes {
            player: Vec2::new(64.0, 32.0),
            asteroids: [Vec2::new(40.0, 40.0); 4],
            ships: [Vec2::new(80.0, 40.0); 2],
            points: Vec2::new(16.0, 16.0),
            planet: Vec2::new(200.0, 200.0),
        }
    }

    /// World with the player at (200, 240), sized 64x32.
    fn test_world() -> World {
        World::new(
            &GameConfig::default(),
            &test_sizes(),
            Vec2::new(800.0, 480.0),
        )
    }

    #[test]
    fn test_no_overlap_no_events() {
        let mut world = test_world();
        world.asteroids.push(Asteroid::new(
            AsteroidKind::Brown,
            Vec2::new(700.0, 10.0),
            300.0,
            Vec2::new(40.0, 40.0),
        ));

        let mut events = GameEvents::new();
        run(&mut world, &mut events);

        assert!(events.player_hit.is_empty());
        assert!(world.player.is_some());
    }

    #[test]
    fn test_obstacle_hit_kills_player() {
        let mut world = test_world();
        // Overlapping the player's rectangle.
        world.asteroids.push(Asteroid::new(
            AsteroidKind::Dark,
            Vec2::new(210.0, 250.0),
            300.0,
            Vec2::new(40.0, 40.0),
        ));

        let mut events = GameEvents::new();
        run(&mut world, &mut events);

        assert_eq!(events.player_hit.len(), 1);
        assert!(world.player.is_none());

        let hit: Vec<_> = events.player_hit.drain().collect();
        // Explosion appears at the player's center: (200 + 32, 240 + 16).
        assert_eq!(hit[0].at, Vec2::new(232.0, 256.0));
    }

    #[test]
    fn test_point_collection_consumes_pickup() {
        let mut world = test_world();
        world.points.push(PointsObject::new(
            Vec2::new(220.0, 250.0),
            180.0,
            Vec2::new(16.0, 16.0),
        ));
        world.points.push(PointsObject::new(
            Vec2::new(600.0, 100.0),
            180.0,
            Vec2::new(16.0, 16.0),
        ));

        let mut events = GameEvents::new();
        run(&mut world, &mut events);

        assert_eq!(events.point_collected.len(), 1);
        assert_eq!(world.points.len(), 1);
        assert_eq!(world.points[0].position.x, 600.0);
        assert!(world.player.is_some());
    }

    #[test]
    fn test_planet_reach_wins() {
        let mut world = test_world();
        world.planet = Some(Planet {
            position: Vec2::new(150.0, 200.0),
            speed: 120.0,
            size: Vec2::new(200.0, 200.0),
        });

        let mut events = GameEvents::new();
        run(&mut world, &mut events);

        assert_eq!(events.planet_reached.len(), 1);
        assert!(world.player.is_none());
        assert!(events.player_hit.is_empty());
    }

    #[test]
    fn test_fatal_hit_preempts_everything_else() {
        let mut world = test_world();
        world.asteroids.push(Asteroid::new(
            AsteroidKind::Square,
            Vec2::new(210.0, 250.0),
            300.0,
            Vec2::new(40.0, 40.0),
        ));
        world.points.push(PointsObject::new(
            Vec2::new(220.0, 250.0),
            180.0,
            Vec2::new(16.0, 16.0),
        ));

        let mut events = GameEvents::new();
        run(&mut world, &mut events);

        // The player died; the overlapping pickup stays uncollected.
        assert_eq!(events.player_hit.len(), 1);
        assert!(events.point_collected.is_empty());
        assert_eq!(world.points.len(), 1);
    }

    #[test]
    fn test_no_player_no_collisions() {
        let mut world = test_world();
        world.player = None;
        world.asteroids.push(Asteroid::new(
            AsteroidKind::Brown,
            Vec2::new(210.0, 250.0),
            300.0,
            Vec2::new(40.0, 40.0),
        ));

        let mut events = GameEvents::new();
        run(&mut world, &mut events);
        assert!(events.player_hit.is_empty());
    }
}
