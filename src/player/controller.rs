use super::handle::MediaHandle;
use super::media::{MediaElement, MediaError, MediaNotification};
use super::state::{PlaybackCells, PlaybackSnapshot};
use std::cell::Cell;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("Media element is not attached yet")]
    NotAttached,
    #[error("Media element is already attached")]
    AlreadyAttached,
    #[error("Media error: {0}")]
    Media(#[from] MediaError),
}

/// How `is_playing` is written when starting playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayConfirmation {
    /// Set `is_playing` before the play command resolves and keep it even if
    /// the host rejects the command.
    #[default]
    Optimistic,
    /// Set `is_playing` before the play command resolves, then re-read the
    /// element's paused flag if the host rejects the command.
    Reconcile,
}

/// Everything the view asks of the player, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerRequest {
    Notify(MediaNotification),
    Toggle,
    /// Raw slider value
    Seek(String),
}

/// Mirrors a media element into observable playback cells and exposes the
/// user-facing actions.
///
/// Async handlers run one at a time. `on_ended` never waits, so it bumps a
/// generation counter instead; a position read that started before the end
/// of the track is dropped rather than written over the reset.
pub struct AudioPlayerController<M> {
    handle: MediaHandle<M>,
    cells: PlaybackCells,
    confirmation: PlayConfirmation,
    in_flight: Mutex<()>,
    generation: Cell<u64>,
}

impl<M: MediaElement> AudioPlayerController<M> {
    pub fn new(confirmation: PlayConfirmation) -> Self {
        Self {
            handle: MediaHandle::new(),
            cells: PlaybackCells::default(),
            confirmation,
            in_flight: Mutex::new(()),
            generation: Cell::new(0),
        }
    }

    pub fn attach(&self, element: M) -> Result<(), PlayerError> {
        self.handle.attach(element)
    }

    pub fn handle(&self) -> &MediaHandle<M> {
        &self.handle
    }

    pub fn cells(&self) -> &PlaybackCells {
        &self.cells
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.cells.snapshot()
    }

    pub fn confirmation(&self) -> PlayConfirmation {
        self.confirmation
    }

    /// Play if paused, pause if playing. Returns the new `is_playing` value.
    pub async fn toggle_play(&self) -> Result<bool, PlayerError> {
        let _guard = self.in_flight.lock().await;
        let media = self.handle.required()?;

        if media.is_paused().await? {
            info!("Starting playback");
            self.cells.is_playing.set(true);

            if let Err(e) = media.play().await {
                warn!("Play command rejected: {}", e);
                if self.confirmation == PlayConfirmation::Reconcile {
                    let paused = match media.is_paused().await {
                        Ok(paused) => paused,
                        Err(read_err) => {
                            warn!("Could not read paused state after rejection: {}", read_err);
                            true
                        }
                    };
                    self.cells.is_playing.set(!paused);
                }
                return Err(e.into());
            }
        } else {
            info!("Pausing playback");
            media.pause().await?;
            self.cells.is_playing.set(false);
        }

        Ok(self.cells.is_playing.get())
    }

    /// `timeupdate`: copy the element's playhead into `current_position`
    pub async fn on_time_update(&self) -> Result<(), PlayerError> {
        let _guard = self.in_flight.lock().await;
        let media = self.handle.required()?;
        let generation = self.generation.get();
        let position = media.current_time().await?;

        if self.generation.get() != generation {
            debug!("Track ended during position read, dropping {}s", position);
            return Ok(());
        }
        self.cells.current_position.set(position);
        Ok(())
    }

    /// `loadedmetadata`: copy the element's length into `duration`
    pub async fn on_metadata_loaded(&self) -> Result<(), PlayerError> {
        let _guard = self.in_flight.lock().await;
        let media = self.handle.required()?;
        let duration = media.duration().await?;
        debug!("Metadata loaded, duration {}s", duration);
        self.cells.duration.set(duration);
        Ok(())
    }

    /// `ended`: reset the view to the start of the track. Duration is kept.
    pub fn on_ended(&self) {
        debug!("Track ended");
        self.generation.set(self.generation.get().wrapping_add(1));
        self.cells.is_playing.set(false);
        self.cells.current_position.set(0.0);
    }

    /// Seek to the position carried by a slider input event.
    ///
    /// The value is read the way an HTML number conversion reads it: an empty
    /// or blank value means 0. Input that is otherwise not a finite number is
    /// ignored. Anything else is handed to the element unclamped;
    /// `current_position` follows on the next `timeupdate`. Returns the
    /// position that was forwarded.
    pub async fn seek(&self, value: &str) -> Result<Option<f64>, PlayerError> {
        let position = match parse_seek_position(value) {
            Some(position) => position,
            None => {
                debug!("Ignoring seek to {:?}", value);
                return Ok(None);
            }
        };

        let _guard = self.in_flight.lock().await;
        let media = self.handle.required()?;
        media.set_current_time(position).await?;
        Ok(Some(position))
    }

    pub async fn handle_notification(
        &self,
        notification: MediaNotification,
    ) -> Result<(), PlayerError> {
        match notification {
            MediaNotification::TimeUpdate => self.on_time_update().await,
            MediaNotification::LoadedMetadata => self.on_metadata_loaded().await,
            MediaNotification::Ended => {
                self.on_ended();
                Ok(())
            }
        }
    }

    pub async fn handle_request(&self, request: PlayerRequest) -> Result<(), PlayerError> {
        match request {
            PlayerRequest::Notify(notification) => self.handle_notification(notification).await,
            PlayerRequest::Toggle => self.toggle_play().await.map(|_| ()),
            PlayerRequest::Seek(value) => self.seek(&value).await.map(|_| ()),
        }
    }
}

fn parse_seek_position(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|position| position.is_finite())
}
