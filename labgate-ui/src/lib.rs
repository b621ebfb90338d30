//! Labgate login page
//!
//! Client-side rendered Leptos application with a single sign-in form.
//! Credentials are never sent anywhere: any non-empty identifier and
//! password are accepted and the form resets itself after a short delay.

use leptos::*;
use leptos_meta::*;

mod components;
pub mod config;
pub mod logging;
mod pages;
mod timer;

pub use pages::{LoginPage, LoginViewModel};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load();

    view! {
        <Title text=config.heading.clone()/>
        <Meta name="description" content="Laboratory system sign-in"/>

        <LoginPage config=config/>
    }
}
