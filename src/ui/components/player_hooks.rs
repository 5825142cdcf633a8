use crate::config::Config;
use crate::player::{AudioPlayerController, PlayerRequest, StateCell, WebAudioElement};
use dioxus::prelude::*;
use std::rc::Rc;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{error, info};

pub type SharedAudioPlayer = Rc<AudioPlayerController<WebAudioElement>>;

/// Hook to create the player owned by the calling component
///
/// The controller lives as long as the component; its element handle is
/// attached later, from the audio element's `onmounted`.
pub fn use_audio_player() -> SharedAudioPlayer {
    let config = use_context::<Config>();
    use_hook(move || Rc::new(AudioPlayerController::new(config.play_confirmation)))
}

/// Hook to get a sender feeding the player's request queue
///
/// One task drains the queue, so media events and clicks are applied in the
/// order they were sent even when a handler waits on the webview.
pub fn use_player_requests(
    player: &SharedAudioPlayer,
) -> tokio_mpsc::UnboundedSender<PlayerRequest> {
    use_hook(|| {
        let (tx, mut rx) = tokio_mpsc::unbounded_channel::<PlayerRequest>();
        let player = player.clone();
        spawn(async move {
            while let Some(request) = rx.recv().await {
                if let Err(e) = player.handle_request(request.clone()).await {
                    error!("Failed to handle {:?}: {}", request, e);
                }
            }
            info!("Player request queue closed, exiting");
        });
        tx
    })
}

/// Signals mirrored from the player's playback cells
#[derive(Clone, Copy)]
pub struct PlaybackSignals {
    pub is_playing: Signal<bool>,
    pub current_position: Signal<f64>,
    pub duration: Signal<f64>,
}

pub fn use_playback_signals(player: &SharedAudioPlayer) -> PlaybackSignals {
    let cells = player.cells();
    PlaybackSignals {
        is_playing: use_cell_signal(&cells.is_playing),
        current_position: use_cell_signal(&cells.current_position),
        duration: use_cell_signal(&cells.duration),
    }
}

/// Mirror one cell into a signal for rendering
///
/// Subscribes once, on first render. The forwarding task is owned by the
/// component and stops with it.
fn use_cell_signal<T: Clone + 'static>(cell: &StateCell<T>) -> Signal<T> {
    let mut signal = use_signal(|| cell.get());
    let rx = use_hook(|| cell.subscribe());

    use_hook(move || {
        let mut rx = rx;
        spawn(async move {
            while rx.changed().await.is_ok() {
                let value = rx.borrow_and_update().clone();
                signal.set(value);
            }
        });
    });

    signal
}
