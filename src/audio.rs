//! Music player
//!
//! Controls the two songs that play within the game. Starting a song always
//! stops whatever is playing first, so tracks restart from the beginning.
//! Songs that failed to load are simply absent and requests degrade to
//! silence; the game never depends on audio being available.

use macroquad::audio::{play_sound, stop_sound, PlaySoundParams, Sound};

pub struct MusicPlayer {
    menu_song: Option<Sound>,
    game_song: Option<Sound>,
    volume: f32,
    playing: Option<Track>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Track {
    Menu,
    Game,
}

impl MusicPlayer {
    pub fn new(menu_song: Option<Sound>, game_song: Option<Sound>, volume: f32) -> Self {
        Self {
            menu_song,
            game_song,
            volume,
            playing: None,
        }
    }

    /// Stop whatever is playing and start the menu song, looped.
    pub fn play_menu_song(&mut self) {
        self.play(Track::Menu);
    }

    /// Stop whatever is playing and start the in-game song, looped.
    pub fn play_game_song(&mut self) {
        self.play(Track::Game);
    }

    fn play(&mut self, track: Track) {
        self.stop();

        let song = match track {
            Track::Menu => &self.menu_song,
            Track::Game => &self.game_song,
        };
        if let Some(song) = song {
            play_sound(
                song,
                PlaySoundParams {
                    looped: true,
                    volume: self.volume,
                },
            );
            self.playing = Some(track);
        }
    }

    fn stop(&mut self) {
        let playing = match self.playing.take() {
            Some(track) => track,
            None => return,
        };
        let song = match playing {
            Track::Menu => &self.menu_song,
            Track::Game => &self.game_song,
        };
        if let Some(song) = song {
            stop_sound(song);
        }
    }
}
