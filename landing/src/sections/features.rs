use leptos::prelude::*;
use tamizha_core::content::{CardLayout, FEATURES, Feature};
use tamizha_core::motion::{Reveal, Stagger};

use super::RevealOnView;

#[component]
pub fn Features() -> impl IntoView {
    let stagger = Stagger::SECTION;
    let heading = Reveal::Rise {
        from_y: 30.0,
        duration: 0.6,
    };

    view! {
        <section class="features">
            <RevealOnView motion=heading class="features-header">
                <h3>"குழுவின் செயல்பாடுகள்"</h3>
                <div class="divider"></div>
            </RevealOnView>

            <div class="features-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| {
                        view! {
                            <RevealOnView delay=stagger.delay(i) margin="-50px" class=card_class(feature)>
                                <FeatureCard feature=*feature />
                            </RevealOnView>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn card_class(feature: &Feature) -> &'static str {
    match feature.layout {
        CardLayout::Wide { .. } => "feature-cell feature-cell-wide",
        CardLayout::Tile => "feature-cell",
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let image = view! {
        <div class="feature-image">
            <img src=feature.image alt=feature.image_alt />
            <div class="feature-image-shade"></div>
        </div>
    };

    let stats = feature
        .stats
        .iter()
        .map(|stat| {
            view! {
                <div class=format!("feature-stat {}", stat.accent.class())>
                    <div class="feature-stat-value">{stat.value}</div>
                    <div class="feature-stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    match feature.layout {
        CardLayout::Wide { image_first } => {
            let body = view! {
                <div class="feature-body">
                    <div class="feature-icon">{feature.icon}</div>
                    <h4>{feature.title}</h4>
                    <p>{feature.description}</p>
                    <div class="feature-stats">{stats}</div>
                </div>
            };
            let columns = if image_first {
                view! { {image} {body} }.into_any()
            } else {
                view! { {body} {image} }.into_any()
            };
            view! {
                <article class=format!("feature-card feature-card-wide glass {}", feature.accent.class())>
                    {columns}
                </article>
            }
            .into_any()
        }
        CardLayout::Tile => view! {
            <article class=format!("feature-card glass {}", feature.accent.class())>
                {image}
                <div class="feature-body">
                    <div class="feature-icon">{feature.icon}</div>
                    <h4>{feature.title}</h4>
                    <p>{feature.description}</p>
                    <div class="feature-stats">{stats}</div>
                </div>
            </article>
        }
        .into_any(),
    }
}
