use dioxus::prelude::*;
#[cfg(feature = "server")]
use std::env;

use views::Commands;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebAppBar)]
    #[route("/")]
    Commands {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Browser view is served from a fixed local port unless `PORT` says otherwise.
#[cfg(feature = "server")]
const DEFAULT_PORT: &str = "4563";
#[cfg(feature = "server")]
const DEFAULT_IP: &str = "127.0.0.1";

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    #[cfg(feature = "server")]
    apply_default_bind_address();

    #[cfg(feature = "server")]
    log_runtime_config();

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

/// Bind-address variables that are unset, paired with the value to use.
#[cfg(feature = "server")]
fn missing_bind_defaults(
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<(&'static str, &'static str)> {
    [("IP", DEFAULT_IP), ("PORT", DEFAULT_PORT)]
        .into_iter()
        .filter(|(key, _)| lookup(key).is_none())
        .collect()
}

/// Fill in `IP` and `PORT` before launch so the fullstack server binds to
/// the local default address.
#[cfg(feature = "server")]
fn apply_default_bind_address() {
    for (key, value) in missing_bind_defaults(|key| env::var(key).ok()) {
        env::set_var(key, value);
    }
}

#[cfg(feature = "server")]
fn log_runtime_config() {
    use dioxus::logger::tracing::info;

    let ip = env::var("IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
    let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    info!("startup: IP={ip} PORT={port}");
    info!("startup: open http://{ip}:{port}/ in a browser");
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

/// A web-specific layout around the shared `AppBar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebAppBar() -> Element {
    rsx! {
        ui::AppBar {}
        main { class: "route_view", Outlet::<Route> {} }
    }
}
