use dioxus::prelude::*;

use views::Commands;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopAppBar)]
    #[route("/")]
    Commands {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use dioxus::logger::tracing::{info, warn};
    use std::sync::Arc;

    api::config::load_dotenv();

    let config = match api::config::UpstreamConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match api::state::AppState::from_config(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            eprintln!("Failed to initialize AppState: {}", e);
            std::process::exit(1);
        }
    };

    if !api::state::AppState::set_global(state) {
        warn!("startup: AppState already initialized, keeping the first one");
    }
    info!("✓ Server initialization complete");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::CommandsTheme {}

        Router::<Route> {}
    }
}

/// A desktop-specific layout around the shared `AppBar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopAppBar() -> Element {
    rsx! {
        ui::AppBar {}
        div { class: "route_view", Outlet::<Route> {} }
    }
}
