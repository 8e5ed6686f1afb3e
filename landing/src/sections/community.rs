use leptos::prelude::*;
use tamizha_core::content::{INVITE_LINK, assets, qr_code_url};
use tamizha_core::motion::{Reveal, Stagger};

use super::RevealOnView;
use crate::config::use_config;
use crate::web;

/// Membership card: QR code for the invite plus join and share actions.
#[component]
pub fn Community() -> impl IntoView {
    let qr_src = qr_code_url(INVITE_LINK, &use_config().qr);
    let stagger = Stagger::SECTION;

    view! {
        <section class="community glass">
            <div class="holographic" aria-hidden="true"></div>

            <RevealOnView delay=stagger.delay(0) class="community-title">
                <h3>
                    "Join the " <span class="text-gold">"Agri"</span> " "
                    <span class="text-green">"Network"</span>
                </h3>
            </RevealOnView>

            <div class="community-body">
                <RevealOnView motion=Reveal::ScaleIn delay=stagger.delay(1) class="community-qr glass">
                    <img src=qr_src alt="QR Code" />
                </RevealOnView>

                <div class="community-details">
                    <RevealOnView delay=stagger.delay(2) class="community-identity">
                        <img src=assets::ICON alt="Agri" class="community-icon" />
                        <div>
                            <h4>"விவசாயம்"</h4>
                            <div class="community-badge">"Verified Network"</div>
                        </div>
                    </RevealOnView>

                    <RevealOnView delay=stagger.delay(3)>
                        <p class="community-tagline">
                            "The exclusive digital home for " <span class="text-green">"Sri Lankan"</span>
                            " agricultural innovators"
                        </p>
                    </RevealOnView>

                    <RevealOnView motion=Reveal::ScaleIn delay=stagger.delay(4) class="community-actions">
                        <a href=INVITE_LINK target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Join Now"
                        </a>
                        <button
                            class="btn btn-icon"
                            aria-label="Share"
                            on:click=move |_| web::share_invite()
                        >
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5">
                                <path d="M4 12v8a2 2 0 002 2h12a2 2 0 002-2v-8M16 6l-4-4-4 4M12 2v13" />
                            </svg>
                        </button>
                    </RevealOnView>
                </div>
            </div>
        </section>
    }
}
