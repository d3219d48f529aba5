//! Game events
//!
//! Collision outcomes are queued as events rather than handled in place, so
//! the collision pass, the scene, and the audio triggering stay decoupled.
//! Events are collected during the frame and drained once per update.

use macroquad::prelude::Vec2;

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The player collided with an obstacle and died.
#[derive(Debug, Clone, Copy)]
pub struct PlayerHitEvent {
    /// Center of the player's hit box at the moment of impact,
    /// where the explosion appears.
    pub at: Vec2,
}

/// The player picked up a point object.
#[derive(Debug, Clone, Copy)]
pub struct PointCollectedEvent;

/// The player reached the planet and won the level.
#[derive(Debug, Clone, Copy)]
pub struct PlanetReachedEvent;

/// The death explosion finished its animation; the level is over.
#[derive(Debug, Clone, Copy)]
pub struct ExplosionFinishedEvent;

/// Container for all game event queues.
#[derive(Default)]
pub struct GameEvents {
    pub player_hit: EventQueue<PlayerHitEvent>,
    pub point_collected: EventQueue<PointCollectedEvent>,
    pub planet_reached: EventQueue<PlanetReachedEvent>,
    pub explosion_finished: EventQueue<ExplosionFinishedEvent>,
}

impl GameEvents {
    pub fn new() -> Self {
        Self::default()
    }
}
