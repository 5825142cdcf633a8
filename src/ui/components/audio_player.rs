use crate::config::Config;
use crate::player::{format_time, MediaNotification, PlayerRequest, WebAudioElement};
use dioxus::prelude::*;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::warn;

use super::player_hooks::{use_audio_player, use_playback_signals, use_player_requests};

/// Queue a request; the queue only closes when the component is dropped
fn send(requests: &tokio_mpsc::UnboundedSender<PlayerRequest>, request: PlayerRequest) {
    if requests.send(request).is_err() {
        warn!("Player request queue closed, dropping request");
    }
}

#[component]
fn PlayToggle(is_playing: ReadOnlySignal<bool>, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if is_playing() { "player-button player-button-pause" } else { "player-button player-button-play" },
            onclick: move |_| on_toggle.call(()),
            if is_playing() {
                "⏸"
            } else {
                "▶"
            }
        }
    }
}

#[component]
fn PositionSlider(
    current_position: ReadOnlySignal<f64>,
    duration: ReadOnlySignal<f64>,
    on_seek: EventHandler<String>,
) -> Element {
    // Unknown length renders as an empty track
    let max = if duration().is_finite() && duration() > 0.0 {
        duration()
    } else {
        0.0
    };
    let percent = if max > 0.0 {
        (current_position() / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    rsx! {
        div { class: "player-position",
            span { class: "player-time", "{format_time(current_position())}" }
            input {
                r#type: "range",
                class: "player-slider",
                style: "background: linear-gradient(to right, #3b82f6 0%, #3b82f6 {percent}%, #374151 {percent}%, #374151 100%);",
                min: "0",
                max: "{max}",
                step: "any",
                value: "{current_position()}",
                oninput: move |evt| on_seek.call(evt.value()),
            }
            span { class: "player-time", "{format_time(duration())}" }
        }
    }
}

/// Audio card: the native element plus play/pause and a seek slider
#[component]
pub fn AudioPlayer() -> Element {
    let config = use_context::<Config>();
    let player = use_audio_player();
    let signals = use_playback_signals(&player);
    let requests = use_player_requests(&player);

    let player_mount = player.clone();
    let requests_time = requests.clone();
    let requests_metadata = requests.clone();
    let requests_ended = requests.clone();
    let requests_toggle = requests.clone();
    let requests_seek = requests.clone();
    let element_id = config.element_id.clone();

    rsx! {
        div { class: "audio-card",
            audio {
                id: "{config.element_id}",
                src: "{config.audio_src}",
                controls: config.show_native_controls,
                crossorigin: config.cross_origin.clone(),
                preload: "metadata",
                onmounted: move |_| {
                    if let Err(e) = player_mount.attach(WebAudioElement::new(element_id.clone())) {
                        warn!("Audio element mounted twice: {}", e);
                    }
                },
                ontimeupdate: move |_| send(&requests_time, PlayerRequest::Notify(MediaNotification::TimeUpdate)),
                onloadedmetadata: move |_| send(&requests_metadata, PlayerRequest::Notify(MediaNotification::LoadedMetadata)),
                onended: move |_| send(&requests_ended, PlayerRequest::Notify(MediaNotification::Ended)),
            }
            div { class: "player-controls",
                PlayToggle {
                    is_playing: signals.is_playing,
                    on_toggle: move |_| send(&requests_toggle, PlayerRequest::Toggle),
                }
                PositionSlider {
                    current_position: signals.current_position,
                    duration: signals.duration,
                    on_seek: move |value: String| send(&requests_seek, PlayerRequest::Seek(value)),
                }
            }
        }
    }
}
