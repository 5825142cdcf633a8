use musicat::config::Config;
use musicat::ui::{make_config, App};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("musicat=info")),
        )
        .init();

    let config = Config::load();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(config)
        .launch(App);
}
