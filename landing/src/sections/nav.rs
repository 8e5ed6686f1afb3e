use leptos::prelude::*;
use tamizha_core::content::{INVITE_LINK, assets};

use crate::web;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <button class="nav-brand" on:click=move |_| web::scroll_to_top()>
                    <img src=assets::LOGO alt="Agri தமிழா logo" class="nav-logo" />
                    <span class="nav-title">
                        "Agri " <span class="nav-title-accent">"தமிழா"</span>
                    </span>
                </button>
                <a href=INVITE_LINK target="_blank" rel="noopener noreferrer" class="btn btn-primary nav-cta">
                    "🚀 Join Group"
                </a>
            </div>
        </nav>
    }
}
