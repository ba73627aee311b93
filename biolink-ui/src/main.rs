mod app;
mod components;
mod config;
mod icon_style;
mod view_state;

use biolink_api_client::Client;
use biolink_util::error::ResultExt;
use leptos::view;

use crate::{
    app::App,
    config::Config,
};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Ok(config) = Config::from_env().log_error("Could not load configuration")
    else {
        return;
    };
    let Ok(client) = Client::new(config.base_url).log_error("Could not create API client")
    else {
        return;
    };
    tracing::info!(api_url = %client.api_url(), "starting");

    leptos::mount_to_body(move || view! { <App client /> });
}
