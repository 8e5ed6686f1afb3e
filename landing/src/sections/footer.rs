use leptos::prelude::*;
use tamizha_core::content::{
    AUDIENCE, CONTACT_EMAIL, CONTACT_PHONE, OBJECTIVES, SOCIAL_LINKS, WHATSAPP_ICON,
    objective_label, whatsapp_chat_url,
};
use tamizha_core::motion::Reveal;

use super::RevealOnView;

const MAIL_ICON: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";

#[component]
pub fn Footer() -> impl IntoView {
    let column = Reveal::Rise {
        from_y: 20.0,
        duration: 0.6,
    };
    let brand = Reveal::SlideIn { from_x: -20.0 };

    view! {
        <footer class="footer glass">
            <div class="container">
                <div class="footer-grid">
                    <RevealOnView motion=brand>
                        <h4 class="footer-title">"Agri " <span class="text-gold">"தமிழா"</span></h4>
                        <p class="footer-tagline">
                            "விவசாயத்தை நேசிக்கிறவர்களுக்காக உருவாக்கப்பட்ட ஒரு டிஜிட்டல் குடும்பம்"
                        </p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="footer-social-link"
                                            aria-label=social.name
                                        >
                                            <svg viewBox="0 0 24 24" fill="currentColor">
                                                <path d=social.icon />
                                            </svg>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </RevealOnView>

                    <RevealOnView motion=column delay=0.2>
                        <h5 class="footer-heading">"Who Is This For?"</h5>
                        <ul class="footer-list">
                            {AUDIENCE
                                .iter()
                                .map(|item| view! { <li><span class="footer-bullet"></span>{*item}</li> })
                                .collect_view()}
                        </ul>
                    </RevealOnView>

                    <RevealOnView motion=column delay=0.25>
                        <h5 class="footer-heading">"Our Objectives"</h5>
                        <ul class="footer-list">
                            {OBJECTIVES
                                .iter()
                                .enumerate()
                                .map(|(i, objective)| {
                                    view! {
                                        <li>
                                            <span class="footer-objective-icon">{objective.icon}</span>
                                            <span>{objective_label(i, objective)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </RevealOnView>

                    <RevealOnView motion=column delay=0.3>
                        <h5 class="footer-heading">"Contact Us"</h5>
                        <div class="footer-contact">
                            <a
                                href=whatsapp_chat_url(CONTACT_PHONE)
                                target="_blank"
                                rel="noopener noreferrer"
                                class="footer-contact-row"
                            >
                                <span class="footer-contact-icon">
                                    <svg viewBox="0 0 24 24" fill="currentColor">
                                        <path d=WHATSAPP_ICON />
                                    </svg>
                                </span>
                                <span>"WhatsApp"</span>
                            </a>
                            <a href=format!("mailto:{CONTACT_EMAIL}") class="footer-contact-row">
                                <span class="footer-contact-icon text-gold">
                                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5">
                                        <path d=MAIL_ICON />
                                    </svg>
                                </span>
                                <span>{CONTACT_EMAIL}</span>
                            </a>
                        </div>
                    </RevealOnView>
                </div>

                <div class="footer-divider"></div>
                <p class="footer-copyright">"© 2026 Agri தமிழா. Built for Farmers with ❤️"</p>
            </div>
        </footer>
    }
}
