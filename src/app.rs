//! Application state and scene switching
//!
//! Fixed set of scenes, each with its own persistent state, all alive for
//! the lifetime of the app. Exactly one scene is shown per frame; switching
//! hides everything else. Scene updates return a `SceneAction`, and
//! `App::apply` is the single place those actions take effect, including the
//! music changes and the level resets they imply.

// Not the prelude glob: it re-exports its own `rand`, which would clash
// with the rand crate used for the level RNG.
use macroquad::prelude::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::GameAssets;
use crate::audio::MusicPlayer;
use crate::config::GameConfig;
use crate::game::ActionScene;
use crate::highscore::HighScoreList;
use crate::scenes::{
    AboutScreen, GameOverScreen, HelpScreen, HighScoreScreen, MenuScreen, WinScreen,
};

/// The available scenes (fixed set, one state each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    Menu,
    Action,
    HighScores,
    Help,
    About,
    GameOver,
    Win,
}

/// What a scene asks the app to do at the end of its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Show another scene, nothing else.
    Switch(SceneId),
    /// Start (or resume) the level and play the in-game song.
    StartGame,
    /// Return to the menu and play the menu song.
    BackToMenu,
    /// The death explosion finished: reset the level, show game over.
    LevelFailed,
    /// The player reached the planet with this score.
    LevelWon { score: u32 },
    /// Save the final score, reset the level, show the high scores.
    SaveScore { score: u32 },
    /// Leave the game.
    Quit,
}

/// Main application state containing all scene states and shared services.
pub struct App {
    /// Currently shown scene
    pub active_scene: SceneId,

    // Scene states, all alive for the app lifetime.
    pub menu: MenuScreen,
    pub action: ActionScene,
    pub high_score_screen: HighScoreScreen,
    pub help: HelpScreen,
    pub about: AboutScreen,
    pub game_over: GameOverScreen,
    pub win: WinScreen,

    // Shared services.
    pub assets: GameAssets,
    pub config: GameConfig,
    pub music: MusicPlayer,
    pub high_scores: HighScoreList,

    /// RNG for rolling level pools.
    rng: StdRng,

    /// Set when the user quits; the frame loop exits on it.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, assets: GameAssets, high_scores: HighScoreList) -> Self {
        let mut rng = StdRng::from_entropy();
        let mut music = MusicPlayer::new(
            assets.menu_song.clone(),
            assets.game_song.clone(),
            config.audio.music_volume,
        );
        // The app opens on the menu, with the menu song playing.
        music.play_menu_song();

        let action = ActionScene::new(&config, &assets.object_sizes(), &mut rng);
        let mut high_score_screen = HighScoreScreen::new();
        high_score_screen.refresh(&high_scores);

        Self {
            active_scene: SceneId::Menu,
            menu: MenuScreen::new(),
            action,
            high_score_screen,
            help: HelpScreen::new(),
            about: AboutScreen::new(),
            game_over: GameOverScreen::new(),
            win: WinScreen::new(),
            assets,
            config,
            music,
            high_scores,
            rng,
            should_quit: false,
        }
    }

    /// Screen size in pixels, from the window configuration.
    pub fn screen(&self) -> Vec2 {
        Vec2::new(
            self.config.window.width as f32,
            self.config.window.height as f32,
        )
    }

    /// Hide everything and show `scene`. The high score scene re-reads its
    /// lines on show so a freshly saved score is visible.
    pub fn switch_to(&mut self, scene: SceneId) {
        if scene == SceneId::HighScores {
            self.high_score_screen.refresh(&self.high_scores);
        }
        self.active_scene = scene;
    }

    /// Process the action the active scene returned this frame.
    pub fn apply(&mut self, action: SceneAction) {
        match action {
            SceneAction::Switch(scene) => self.switch_to(scene),

            SceneAction::StartGame => {
                self.music.play_game_song();
                self.switch_to(SceneId::Action);
            }

            SceneAction::BackToMenu => {
                self.music.play_menu_song();
                self.switch_to(SceneId::Menu);
            }

            SceneAction::LevelFailed => {
                self.reset_level();
                self.switch_to(SceneId::GameOver);
            }

            SceneAction::LevelWon { score } => {
                self.win.set_score(score);
                self.switch_to(SceneId::Win);
            }

            SceneAction::SaveScore { score } => {
                if let Err(e) = self.high_scores.add(score) {
                    eprintln!("Failed to save high score: {}", e);
                }
                self.reset_level();
                self.switch_to(SceneId::HighScores);
            }

            SceneAction::Quit => self.should_quit = true,
        }
    }

    /// Start the level over: fresh pools, fresh player, score back to zero.
    fn reset_level(&mut self) {
        self.action
            .reset(&self.config, &self.assets.object_sizes(), &mut self.rng);
    }
}
