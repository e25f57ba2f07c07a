#![allow(warnings)]
//! Project Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod forms;
mod logging;
mod models;
mod query;
mod router;
mod storage;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(AppConfig::from_build_env().log_level_filter());
    let config = AppConfig::load();
    log::set_max_level(config.log_level_filter());
    log::info!("graphql endpoint: {}", config.endpoint);
    mount_to_body(move || view! { <App config=config /> });
}
