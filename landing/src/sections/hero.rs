use leptos::prelude::*;
use tamizha_core::HeroTransform;
use tamizha_core::content::{INVITE_LINK, assets};
use tamizha_core::motion::Reveal;

use crate::web;

/// Full-height banner. The background drifts down and the content fades
/// out as the page scrolls.
#[component]
pub fn Hero(hero: ReadSignal<HeroTransform>) -> impl IntoView {
    let entrance = RwSignal::new(false);
    request_animation_frame(move || entrance.set(true));
    let enter = move |motion: Reveal, delay: f64| move || motion.style(entrance.get(), delay);
    let headline = Reveal::Rise {
        from_y: 60.0,
        duration: 1.0,
    };
    let follow = Reveal::Rise {
        from_y: 30.0,
        duration: 0.8,
    };

    view! {
        <header class="hero">
            <div class="hero-background" style=move || hero.get().background_style()>
                <div
                    class="hero-image"
                    style=format!("background-image: url({});", assets::BANNER)
                ></div>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content" style=move || hero.get().content_style()>
                <div class="hero-badge" style=enter(Reveal::ScaleIn, 0.2)>
                    <span class="hero-badge-dot"></span>
                    <span class="hero-badge-text">"Sri Lankan Agri Network"</span>
                </div>

                <h2 class="hero-title" style=enter(headline, 0.4)>
                    <span class="hero-title-lead">"விவசாயத்தின்"</span>
                    <span class="hero-title-accent">"நவீன தோழன்"</span>
                </h2>

                <p class="hero-description" style=enter(follow, 0.8)>
                    "விவசாயத்தை நேசிக்கும் இதயங்களை ஒன்றிணைக்கும் மிகப்பெரிய டிஜிட்டல் குடும்பம்."
                </p>

                <div class="hero-actions" style=enter(follow, 1.0)>
                    <a href=INVITE_LINK target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                        "இப்போதே இணையுங்கள்"
                    </a>
                    <button class="btn btn-secondary" on:click=move |_| web::share_invite()>
                        "பகிர்"
                    </button>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-dot"></div>
            </div>
        </header>
    }
}
