pub mod app;
pub mod audio_player;
pub mod player_hooks;

pub use app::App;
pub use audio_player::AudioPlayer;
pub use player_hooks::{
    use_audio_player, use_playback_signals, use_player_requests, PlaybackSignals, SharedAudioPlayer,
};
