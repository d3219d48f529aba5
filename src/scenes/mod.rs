//! Menu and display scenes
//!
//! Everything outside the action scene: the main menu, the informational
//! screens, and the end-of-game screens. Each scene is a state struct with
//! `update -> Option<SceneAction>` and `draw`, and all of them stay alive
//! for the whole run of the app.

mod about;
mod game_over;
mod help;
mod highscores;
mod menu;
mod win;

pub use about::AboutScreen;
pub use game_over::GameOverScreen;
pub use help::HelpScreen;
pub use highscores::HighScoreScreen;
pub use menu::MenuScreen;
pub use win::WinScreen;
