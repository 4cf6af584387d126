//! Nutrition Dashboard Frontend Entry Point

mod api;
mod app;
mod charts;
mod components;
mod config;
mod context;
mod controllers;
mod models;
mod quantity;
mod store;
mod totals;
mod view;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::from_window();
    let logger = match console_logger::init(config.log_level, console_logger::DEFAULT_CAPACITY) {
        Ok(logger) => Some(logger),
        Err(e) => {
            eprintln!("logger already installed: {}", e);
            None
        }
    };
    log::info!("[APP] using API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config logger=logger /> });
}
