//! Game content loading
//!
//! Everything the game draws or plays is loaded up front in `main`, so the
//! scenes never touch the filesystem mid-frame. Textures and the font are
//! required; songs and sound effects are optional and missing audio files
//! degrade to silence with a diagnostic.

use std::fmt;

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::game::{AsteroidKind, ObjectSizes, ShipKind};

/// Failed to load a piece of required content.
#[derive(Debug)]
pub enum AssetError {
    Texture { path: String, message: String },
    Font { path: String, message: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Texture { path, message } => {
                write!(f, "texture {}: {}", path, message)
            }
            AssetError::Font { path, message } => write!(f, "font {}: {}", path, message),
        }
    }
}

impl std::error::Error for AssetError {}

/// All loaded game content.
pub struct GameAssets {
    /// Fighter animation frames, in playback order.
    player_frames: Vec<Texture2D>,

    /// Asteroid textures, indexed by `AsteroidKind`.
    asteroids: [Texture2D; 4],

    /// Space ship textures, indexed by `ShipKind`.
    ships: [Texture2D; 2],

    pub points: Texture2D,
    pub planet: Texture2D,

    /// Explosion sprite sheet, 12 frames in a row.
    pub explosion: Texture2D,

    pub background: Texture2D,
    pub help_screen: Texture2D,
    pub about_screen: Texture2D,

    pub font: Font,

    pub menu_song: Option<Sound>,
    pub game_song: Option<Sound>,
    pub explosion_sfx: Option<Sound>,
}

/// Number of fighter animation frames on disk.
const PLAYER_FRAME_COUNT: usize = 20;

impl GameAssets {
    /// Load all content from the `assets/` directory.
    pub async fn load() -> Result<GameAssets, AssetError> {
        let mut player_frames = Vec::with_capacity(PLAYER_FRAME_COUNT);
        for frame in 1..=PLAYER_FRAME_COUNT {
            let path = format!("assets/textures/smallfighter{:04}.png", frame);
            player_frames.push(texture(&path).await?);
        }

        let assets = GameAssets {
            player_frames,
            asteroids: [
                texture("assets/textures/asteroid_brown.png").await?,
                texture("assets/textures/asteroid_gray.png").await?,
                texture("assets/textures/asteroid_dark.png").await?,
                texture("assets/textures/asteroid_square.png").await?,
            ],
            ships: [
                texture("assets/textures/destroyer.png").await?,
                texture("assets/textures/cruiser.png").await?,
            ],
            points: texture("assets/textures/points_object.png").await?,
            planet: texture("assets/textures/planet.png").await?,
            explosion: texture("assets/textures/explosion.png").await?,
            background: texture("assets/textures/space_bg.png").await?,
            help_screen: texture("assets/textures/help_screen.png").await?,
            about_screen: texture("assets/textures/about_screen.png").await?,
            font: font("assets/fonts/menu.ttf").await?,
            menu_song: sound("assets/sounds/menu_song.ogg").await,
            game_song: sound("assets/sounds/ingame_song.ogg").await,
            explosion_sfx: sound("assets/sounds/explosion.ogg").await,
        };

        println!("Loaded game content");
        Ok(assets)
    }

    pub fn player_frame(&self, frame: usize) -> &Texture2D {
        &self.player_frames[frame % self.player_frames.len()]
    }

    pub fn asteroid(&self, kind: AsteroidKind) -> &Texture2D {
        &self.asteroids[kind.index()]
    }

    pub fn ship(&self, kind: ShipKind) -> &Texture2D {
        &self.ships[kind.index()]
    }

    /// Capture the pixel size of every object texture, so game logic never
    /// needs the textures themselves.
    pub fn object_sizes(&self) -> ObjectSizes {
        let size = |t: &Texture2D| vec2(t.width(), t.height());
        ObjectSizes {
            player: size(&self.player_frames[0]),
            asteroids: [
                size(&self.asteroids[0]),
                size(&self.asteroids[1]),
                size(&self.asteroids[2]),
                size(&self.asteroids[3]),
            ],
            ships: [size(&self.ships[0]), size(&self.ships[1])],
            points: size(&self.points),
            planet: size(&self.planet),
        }
    }
}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        message: e.to_string(),
    })
}

async fn font(path: &str) -> Result<Font, AssetError> {
    load_ttf_font(path).await.map_err(|e| AssetError::Font {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Optional content: a missing or unreadable sound is reported and skipped.
async fn sound(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            eprintln!("Failed to load {}: {} - continuing without it", path, e);
            None
        }
    }
}
