use labgate_ui::{logging::LoggingConfig, App};
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = LoggingConfig::default().init() {
        web_sys::console::error_1(&format!("Failed to initialize logging: {}", e).into());
    }

    mount_to_body(|| view! { <App/> })
}
