use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tamizha_core::motion::Reveal;

use crate::web::ViewportWatch;

/// Wraps `children` in a block that animates in the first time it scrolls
/// into view. Without IntersectionObserver the content is shown at once.
#[component]
pub fn RevealOnView(
    #[prop(default = Reveal::FadeUp)] motion: Reveal,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = "")] class: &'static str,
    /// Bottom root margin, e.g. `-100px` to trigger slightly late.
    #[prop(default = "0px")]
    margin: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = RwSignal::new(false);
    let watch = StoredValue::new(None::<SendWrapper<ViewportWatch>>);

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        let root_margin = format!("0px 0px {margin} 0px");
        match ViewportWatch::once(&element, &root_margin, move || revealed.set(true)) {
            Some(active) => watch.set_value(Some(SendWrapper::new(active))),
            None => revealed.set(true),
        }
    });

    on_cleanup(move || {
        let _ = watch.try_update_value(Option::take);
    });

    view! {
        <div node_ref=node class=class style=move || motion.style(revealed.get(), delay)>
            {children()}
        </div>
    }
}
