use crate::ui::{FAVICON, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::audio_player::AudioPlayer;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "app",
            AudioPlayer {}
        }
    }
}
