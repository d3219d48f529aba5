//! The action scene: level one
//!
//! Owns the level world, the object generator, and the scrolling background,
//! and runs the per-frame order: spawn, move, collide, resolve events, prune.
//! Escape pauses back to the menu with the level state intact; the level is
//! only reset after a death or a saved win.

mod background;
mod collision;
mod event;
mod explosion;
mod hud;
mod objects;
mod player;
mod spawner;
mod world;

pub use objects::{AsteroidKind, ObjectSizes, ShipKind};

// Not the prelude glob: it re-exports its own `rand`, which would clash
// with the rand crate the spawner is generic over.
use macroquad::prelude::{draw_texture, is_key_pressed, KeyCode, Vec2, WHITE};
use rand::Rng;

use crate::app::{SceneAction, SceneId};
use crate::assets::GameAssets;
use crate::config::GameConfig;

use background::Background;
use event::GameEvents;
use explosion::Explosion;
use spawner::SpaceObjectGenerator;
use world::World;

/// Background scroll speed in pixels per second.
const BACKGROUND_SPEED: f32 = 60.0;

pub struct ActionScene {
    world: World,
    generator: SpaceObjectGenerator,
    background: Background,
    events: GameEvents,
    screen: Vec2,
}

impl ActionScene {
    pub fn new<R: Rng>(config: &GameConfig, sizes: &ObjectSizes, rng: &mut R) -> Self {
        let screen = Vec2::new(config.window.width as f32, config.window.height as f32);
        Self {
            world: World::new(config, sizes, screen),
            generator: SpaceObjectGenerator::new(&config.spawner, sizes, screen, rng),
            background: Background::new(screen, BACKGROUND_SPEED),
            events: GameEvents::new(),
            screen,
        }
    }

    /// Throw away the level and start over: fresh pools, fresh player,
    /// score back to zero.
    pub fn reset<R: Rng>(&mut self, config: &GameConfig, sizes: &ObjectSizes, rng: &mut R) {
        *self = ActionScene::new(config, sizes, rng);
    }

    /// Advance the level by one frame.
    pub fn update(
        &mut self,
        dt: f32,
        config: &GameConfig,
        assets: &GameAssets,
    ) -> Option<SceneAction> {
        // Escape pauses back to the menu; the level stays as it is.
        if is_key_pressed(KeyCode::Escape) {
            return Some(SceneAction::Switch(SceneId::Menu));
        }

        self.background.update(dt);
        self.generator.update(dt, &mut self.world);

        if let Some(player) = &mut self.world.player {
            player.update(dt, self.screen);
        }
        self.world.update_objects(dt);

        if let Some(explosion) = &mut self.world.explosion {
            explosion.update(dt, &mut self.events);
        }

        collision::run(&mut self.world, &mut self.events);

        let action = self.resolve_events(config, assets);
        self.world.remove_off_screen();
        action
    }

    /// Drain the frame's events into scene-level outcomes.
    fn resolve_events(&mut self, config: &GameConfig, assets: &GameAssets) -> Option<SceneAction> {
        for hit in self.events.player_hit.drain() {
            self.world.explosion = Some(Explosion::spawn(hit.at, assets, config.audio.sfx_volume));
        }

        for _ in self.events.point_collected.drain() {
            self.world.meter.score += 1;
        }

        if !self.events.planet_reached.is_empty() {
            self.events.planet_reached.clear();
            return Some(SceneAction::LevelWon {
                score: self.world.meter.score,
            });
        }

        if !self.events.explosion_finished.is_empty() {
            self.events.explosion_finished.clear();
            self.world.explosion = None;
            return Some(SceneAction::LevelFailed);
        }

        None
    }

    pub fn draw(&self, assets: &GameAssets) {
        self.background.draw(assets);

        for points in &self.world.points {
            draw_texture(&assets.points, points.position.x, points.position.y, WHITE);
        }
        for ship in &self.world.ships {
            draw_texture(
                assets.ship(ship.kind),
                ship.position.x,
                ship.position.y,
                WHITE,
            );
        }
        for asteroid in &self.world.asteroids {
            draw_texture(
                assets.asteroid(asteroid.kind),
                asteroid.position.x,
                asteroid.position.y,
                WHITE,
            );
        }
        if let Some(planet) = &self.world.planet {
            draw_texture(&assets.planet, planet.position.x, planet.position.y, WHITE);
        }

        if let Some(player) = &self.world.player {
            player.draw(assets);
        }
        if let Some(explosion) = &self.world.explosion {
            explosion.draw(assets);
        }

        self.world.meter.draw(&assets.font);
    }
}
