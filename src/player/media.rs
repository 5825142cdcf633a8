use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    #[error("Eval failed: {0}")]
    Eval(String),
    #[error("Unexpected value from media element: {0}")]
    Decode(String),
    #[error("Playback rejected: {0}")]
    PlayRejected(String),
    #[error("Media element not found: {0}")]
    ElementMissing(String),
}

/// Lifecycle notifications emitted by the media element.
/// None of them carry a payload; handlers read the element back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaNotification {
    /// `timeupdate`
    TimeUpdate,
    /// `loadedmetadata`
    LoadedMetadata,
    /// `ended`
    Ended,
}

/// Trait for the host's playable media primitive
///
/// Calls go through the host (the webview for the desktop app), so every
/// operation is async and may fail. Implementations are not required to be
/// `Send`: the player lives on the UI thread.
#[async_trait::async_trait(?Send)]
pub trait MediaElement {
    async fn is_paused(&self) -> Result<bool, MediaError>;

    /// Start playback. Resolves once the host accepted or rejected the request.
    async fn play(&self) -> Result<(), MediaError>;

    async fn pause(&self) -> Result<(), MediaError>;

    /// Current playhead in seconds
    async fn current_time(&self) -> Result<f64, MediaError>;

    /// Move the playhead. The host applies its own clamping, if any.
    async fn set_current_time(&self, seconds: f64) -> Result<(), MediaError>;

    /// Total length in seconds. NaN until metadata has loaded.
    async fn duration(&self) -> Result<f64, MediaError>;
}
