use tokio::sync::watch;

/// A single observable value
///
/// Writes always notify subscribers, even when the value is unchanged, so a
/// repeated `timeupdate` at the same position still reaches the view.
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Subscribe to changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

/// Point-in-time read of all playback cells
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub current_position: f64,
    pub duration: f64,
}

/// The three independent playback cells mirrored from the media element
pub struct PlaybackCells {
    pub is_playing: StateCell<bool>,
    /// Seconds
    pub current_position: StateCell<f64>,
    /// Seconds, 0 until metadata has loaded
    pub duration: StateCell<f64>,
}

impl Default for PlaybackCells {
    fn default() -> Self {
        Self {
            is_playing: StateCell::new(false),
            current_position: StateCell::new(0.0),
            duration: StateCell::new(0.0),
        }
    }
}

impl PlaybackCells {
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            is_playing: self.is_playing.get(),
            current_position: self.current_position.get(),
            duration: self.duration.get(),
        }
    }
}
