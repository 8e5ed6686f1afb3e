// Agri Tamizha Landing Page: Leptos 0.8 CSR
// Developed with ❤️ for Sri Lankan farmers (c)2026 Agri Tamizha

mod config;
mod page;
mod sections;
mod web;

use leptos::prelude::*;
use page::LandingPage;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(config::load());
    view! { <LandingPage /> }
}
