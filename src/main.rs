mod api;
mod app;
mod board;
mod components;
mod context;
mod error;
mod models;
mod route;
mod session;
mod slug;
mod validation;

use leptos::mount::mount_to_body;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
