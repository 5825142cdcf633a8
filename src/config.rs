use crate::player::PlayConfirmation;
use tracing::info;

pub const DEFAULT_AUDIO_SRC: &str = "/songtest.mp3";
pub const DEFAULT_CROSS_ORIGIN: &str = "anonymous";
pub const DEFAULT_ELEMENT_ID: &str = "musicat-audio";

/// Application configuration
/// In debug builds: loads a .env file first, then reads environment variables
/// In release builds: reads environment variables only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Source URL of the track played by the audio element
    pub audio_src: String,
    /// Show the element's native controls next to the custom ones
    pub show_native_controls: bool,
    /// `crossorigin` attribute, omitted when None
    pub cross_origin: Option<String>,
    /// How the playing flag is written when the host may refuse to play
    pub play_confirmation: PlayConfirmation,
    /// DOM id of the audio element
    pub element_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            show_native_controls: true,
            cross_origin: Some(DEFAULT_CROSS_ORIGIN.to_string()),
            play_confirmation: PlayConfirmation::Optimistic,
            element_id: DEFAULT_ELEMENT_ID.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let audio_src = lookup("MUSICAT_AUDIO_SRC")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.audio_src);

        let show_native_controls = lookup("MUSICAT_SHOW_CONTROLS")
            .map(|v| parse_bool(&v))
            .unwrap_or(defaults.show_native_controls);

        // Explicitly empty disables the attribute
        let cross_origin = match lookup("MUSICAT_CROSS_ORIGIN") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v),
            None => defaults.cross_origin,
        };

        let play_confirmation = match lookup("MUSICAT_CONFIRM_PLAY") {
            Some(v) if parse_bool(&v) => PlayConfirmation::Reconcile,
            Some(_) => PlayConfirmation::Optimistic,
            None => defaults.play_confirmation,
        };

        let element_id = lookup("MUSICAT_ELEMENT_ID")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.element_id);

        info!(
            "Config: source {}, play confirmation {:?}",
            audio_src, play_confirmation
        );

        Self {
            audio_src,
            show_native_controls,
            cross_origin,
            play_confirmation,
            element_id,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
