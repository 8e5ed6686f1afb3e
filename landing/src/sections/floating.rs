use leptos::prelude::*;
use tamizha_core::content::{INVITE_LINK, WHATSAPP_ICON};
use tamizha_core::visibility::button_style;

use crate::web;

/// Desktop-only shortcut to the invite, pinned above the scroll-to-top button.
#[component]
pub fn FloatingWhatsApp() -> impl IntoView {
    view! {
        <a
            href=INVITE_LINK
            target="_blank"
            rel="noopener noreferrer"
            class="floating-whatsapp"
            aria-label="Join on WhatsApp"
        >
            <svg viewBox="0 0 24 24" fill="currentColor">
                <path d=WHATSAPP_ICON />
            </svg>
            <span class="floating-whatsapp-ping"></span>
        </a>
    }
}

#[component]
pub fn ScrollTopButton(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="scroll-top"
            aria-label="Scroll to top"
            aria-hidden=move || (!visible.get()).to_string()
            style=move || button_style(visible.get())
            on:click=move |_| web::scroll_to_top()
        >
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="3">
                <path d="M5 15l7-7 7 7" />
            </svg>
        </button>
    }
}
