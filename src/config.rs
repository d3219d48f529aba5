//! Game tuning configuration
//!
//! All gameplay constants live in `GameConfig`, loaded from `assets/game.ron`
//! when present. A missing file means the compiled-in defaults; a malformed
//! file is reported and also falls back to defaults so the game always starts.

use serde::{Deserialize, Serialize};

/// Default location of the tuning file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.ron";

/// Top-level tuning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub spawner: SpawnerConfig,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            player: PlayerConfig::default(),
            spawner: SpawnerConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            title: "Destination Earth".to_string(),
        }
    }
}

/// Player movement and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in pixels per second.
    pub speed: f32,
    /// Seconds each animation frame is held.
    pub frame_duration: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 240.0,
            frame_duration: 0.1,
        }
    }
}

/// Obstacle/pickup pool sizes, release intervals, and speeds.
///
/// Intervals are wall-clock seconds between releases; speeds are pixels
/// per second of leftward drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub asteroid_count: usize,
    pub point_count: usize,
    pub ship_count: usize,

    pub asteroid_interval: f32,
    pub point_interval: f32,
    pub ship_interval: f32,

    /// Random obstacle speed range (asteroids and space ships).
    pub obstacle_speed_min: f32,
    pub obstacle_speed_max: f32,

    pub point_speed: f32,
    pub planet_speed: f32,

    /// Spawn rows keep this much headroom at the bottom of the screen so
    /// the tallest object starts fully visible.
    pub max_object_height: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 85,
            point_count: 50,
            ship_count: 15,

            asteroid_interval: 0.7,
            point_interval: 1.0,
            ship_interval: 4.0,

            obstacle_speed_min: 300.0,
            obstacle_speed_max: 600.0,

            point_speed: 180.0,
            planet_speed: 120.0,

            max_object_height: 30.0,
        }
    }
}

/// Audio volumes (0.0–1.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_volume: f32,
    pub sfx_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: 0.3,
            sfx_volume: 0.2,
        }
    }
}

impl GameConfig {
    /// Load the configuration from a RON file.
    ///
    /// A missing file is normal (defaults apply); a file that exists but
    /// fails to parse is reported and defaults apply.
    pub fn load(path: &str) -> GameConfig {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return GameConfig::default(),
        };

        match ron::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to parse {}: {} - using defaults", path, e);
                GameConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_original_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.window.width, 800);
        assert_eq!(cfg.window.height, 480);
        assert_eq!(cfg.spawner.asteroid_count, 85);
        assert_eq!(cfg.spawner.point_count, 50);
        assert_eq!(cfg.spawner.ship_count, 15);
        assert_eq!(cfg.spawner.asteroid_interval, 0.7);
        assert_eq!(cfg.spawner.point_interval, 1.0);
        assert_eq!(cfg.spawner.ship_interval, 4.0);
        assert_eq!(cfg.audio.music_volume, 0.3);
        assert_eq!(cfg.audio.sfx_volume, 0.2);
    }

    #[test]
    fn test_ron_round_trip() {
        let cfg = GameConfig::default();
        let text = ron::to_string(&cfg).unwrap();
        let back: GameConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.spawner.asteroid_count, cfg.spawner.asteroid_count);
        assert_eq!(back.player.speed, cfg.player.speed);
        assert_eq!(back.window.title, cfg.window.title);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        // A file that only overrides one section leaves the rest at defaults.
        let text = "(spawner: (asteroid_count: 5))";
        let cfg: GameConfig = ron::from_str(text).unwrap();
        assert_eq!(cfg.spawner.asteroid_count, 5);
        assert_eq!(cfg.spawner.point_count, 50);
        assert_eq!(cfg.window.width, 800);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cfg = GameConfig::load("does/not/exist.ron");
        assert_eq!(cfg.spawner.asteroid_count, 85);
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "this is not ron").unwrap();

        let cfg = GameConfig::load(path.to_str().unwrap());
        assert_eq!(cfg.spawner.asteroid_count, 85);
    }
}
