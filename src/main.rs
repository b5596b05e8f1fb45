mod api;
mod app;
mod catalog;
mod components;
mod config;
mod derive;
mod download;
mod error;
mod form;
mod lookup;
mod models;
mod notify;
mod pages;
mod resource;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    config::init();
    leptos::mount::mount_to_body(App);
}
