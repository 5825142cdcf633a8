mod controller;
mod format;
mod handle;
mod media;
mod state;
mod web_audio;

pub use controller::{AudioPlayerController, PlayConfirmation, PlayerError, PlayerRequest};
pub use format::{format_time, format_time_opt};
pub use handle::MediaHandle;
pub use media::{MediaElement, MediaError, MediaNotification};
pub use state::{PlaybackCells, PlaybackSnapshot, StateCell};
pub use web_audio::WebAudioElement;
