use leptos::prelude::*;
use tamizha_core::content::assets;
use tamizha_core::motion::{Reveal, Stagger};

use super::RevealOnView;

#[component]
pub fn About() -> impl IntoView {
    let stagger = Stagger::SECTION;

    view! {
        <section class="about glass">
            <div class="about-grid">
                <RevealOnView class="about-photo" delay=stagger.delay(0) margin="-100px">
                    <img src=assets::ABOUT_PHOTO alt="Agriculture Collaboration" />
                </RevealOnView>

                <div class="about-story">
                    <RevealOnView class="section-heading" delay=stagger.delay(1) margin="-100px">
                        <div class="section-heading-bar"></div>
                        <h3>"எங்கள் பயணம்"</h3>
                    </RevealOnView>

                    <RevealOnView delay=stagger.delay(2) margin="-100px">
                        <p>
                            "Social Media-வில் விவசாயத்திற்காக உழைக்கும் பலர் இருக்கின்றார்கள். "
                            <span class="text-gold">
                                "அவர்களை பார்த்தபோது ஒரு உண்மை புரிந்தது: நாம் தனியாக இல்லை."
                            </span>
                            " அறிவு இருக்கின்றது. அனுபவம் இருக்கின்றது. முயற்சி இருக்கின்றது. "
                            "ஆனா எல்லோரும் தனித்தனியாக செயல்படுகின்றோம்."
                        </p>
                    </RevealOnView>

                    <RevealOnView motion=Reveal::ScaleIn delay=stagger.delay(3) class="about-quote glass" margin="-100px">
                        <p>
                            "அதனால்தான் ஒரு முடிவு எடுத்தோம்: "
                            "“விவசாயத்தை நேசிக்கும் இதயங்களை ஒன்றிணைக்கும் ஒரு மாபெரும் டிஜிட்டல் குடும்பம் உருவாக்க வேண்டும்” என்று. "
                            "அந்த எண்ணத்தில்தான் இந்த \"விவசாயம்\" WhatsApp குழு உருவாக்கப்பட்டது."
                        </p>
                    </RevealOnView>

                    <RevealOnView delay=stagger.delay(4) margin="-100px">
                        <p>
                            "ஒவ்வொருவரின் அறிவும் அனுபவமும் இன்னொருவருக்கு உதவியாக மாற வேண்டும். "
                            "நாம் இணையும் ஒவ்வொரு தருணமும் விவசாயத்தின் வளர்ச்சிக்கான ஒரு புதிய படியாகும்."
                        </p>
                    </RevealOnView>
                </div>
            </div>
        </section>
    }
}
