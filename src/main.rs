#![allow(warnings)]
//! Task Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod notice;
mod session;
mod store;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("task service at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
