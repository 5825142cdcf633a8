#![cfg(feature = "test-utils")]

mod support;
use tracing::debug;

use crate::support::tracing_init;
use musicat::player::{
    format_time, AudioPlayerController, MediaNotification, PlayConfirmation, PlaybackSnapshot,
    PlayerError,
};
use musicat::test_support::{FakeMediaElement, MediaCall};

/// Player with a fake element already attached
struct PlayerFixture {
    player: AudioPlayerController<FakeMediaElement>,
    media: FakeMediaElement,
}

impl PlayerFixture {
    fn new(confirmation: PlayConfirmation) -> Self {
        tracing_init();

        let media = FakeMediaElement::new();
        let player = AudioPlayerController::new(confirmation);
        player
            .attach(media.clone())
            .expect("Failed to attach media element");

        Self { player, media }
    }

    async fn notify(&self, notification: MediaNotification) {
        self.player
            .handle_notification(notification)
            .await
            .expect("Notification failed");
    }
}

#[tokio::test]
async fn test_full_track_lifecycle() {
    let fixture = PlayerFixture::new(PlayConfirmation::Optimistic);
    let (player, media) = (&fixture.player, &fixture.media);

    media.set_duration(125.0);
    fixture.notify(MediaNotification::LoadedMetadata).await;
    assert_eq!(player.snapshot().duration, 125.0);
    assert_eq!(format_time(player.snapshot().duration), "2:05");

    assert_eq!(player.toggle_play().await, Ok(true));

    media.set_current_time_external(42.7);
    fixture.notify(MediaNotification::TimeUpdate).await;
    assert_eq!(player.snapshot().current_position, 42.7);
    assert_eq!(format_time(player.snapshot().current_position), "0:42");

    // Seek past the end: forwarded as-is, the element clamps
    assert_eq!(player.seek("500").await, Ok(Some(500.0)));
    fixture.notify(MediaNotification::TimeUpdate).await;
    assert_eq!(player.snapshot().current_position, 125.0);

    media.finish();
    fixture.notify(MediaNotification::Ended).await;
    debug!("Snapshot after end: {:?}", player.snapshot());
    assert_eq!(
        player.snapshot(),
        PlaybackSnapshot {
            is_playing: false,
            current_position: 0.0,
            duration: 125.0,
        }
    );

    // Playing again after the end restarts from the element's paused state
    assert_eq!(player.toggle_play().await, Ok(true));
    assert_eq!(
        media.calls(),
        vec![MediaCall::Play, MediaCall::Seek(500.0), MediaCall::Play]
    );
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let fixture = PlayerFixture::new(PlayConfirmation::Optimistic);
    let before = fixture.player.snapshot().is_playing;

    fixture.player.toggle_play().await.unwrap();
    fixture.player.toggle_play().await.unwrap();

    assert_eq!(fixture.player.snapshot().is_playing, before);
    assert_eq!(fixture.media.paused(), !before);
}

#[tokio::test]
async fn test_ended_from_any_state() {
    for playing in [false, true] {
        let fixture = PlayerFixture::new(PlayConfirmation::Optimistic);
        fixture.media.set_duration(30.0);
        if playing {
            fixture.player.toggle_play().await.unwrap();
        }
        fixture.media.set_current_time_external(17.0);
        fixture.notify(MediaNotification::TimeUpdate).await;

        fixture.notify(MediaNotification::Ended).await;

        let snapshot = fixture.player.snapshot();
        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.current_position, 0.0);
    }
}

#[tokio::test]
async fn test_blocked_autoplay_then_allowed() {
    let fixture = PlayerFixture::new(PlayConfirmation::Reconcile);
    fixture.media.reject_play("NotAllowedError");

    let result = fixture.player.toggle_play().await;
    assert!(matches!(result, Err(PlayerError::Media(_))));
    assert!(!fixture.player.snapshot().is_playing);
    assert!(fixture.media.paused());

    fixture.media.allow_play();
    assert_eq!(fixture.player.toggle_play().await, Ok(true));
    assert!(!fixture.media.paused());
}

#[tokio::test]
async fn test_subscribers_observe_changes() {
    let fixture = PlayerFixture::new(PlayConfirmation::Optimistic);
    let mut playing_rx = fixture.player.cells().is_playing.subscribe();
    let mut position_rx = fixture.player.cells().current_position.subscribe();
    let mut duration_rx = fixture.player.cells().duration.subscribe();

    fixture.media.set_duration(61.0);
    fixture.notify(MediaNotification::LoadedMetadata).await;
    duration_rx.changed().await.unwrap();
    assert_eq!(*duration_rx.borrow_and_update(), 61.0);

    fixture.player.toggle_play().await.unwrap();
    playing_rx.changed().await.unwrap();
    assert!(*playing_rx.borrow_and_update());

    fixture.media.set_current_time_external(3.5);
    fixture.notify(MediaNotification::TimeUpdate).await;
    position_rx.changed().await.unwrap();
    assert_eq!(*position_rx.borrow_and_update(), 3.5);
}

#[tokio::test]
async fn test_unattached_player_fails_fast() {
    tracing_init();
    let player: AudioPlayerController<FakeMediaElement> =
        AudioPlayerController::new(PlayConfirmation::Optimistic);

    assert!(!player.handle().is_attached());
    assert_eq!(
        player.handle_notification(MediaNotification::TimeUpdate).await,
        Err(PlayerError::NotAttached)
    );
    // Bad input is dropped before the element is needed
    assert_eq!(player.seek("not a number").await, Ok(None));
}
