//! Browser adapters: window listeners, viewport geometry, smooth scrolling,
//! share/clipboard and one-shot viewport watches.
//!
//! Everything degrades to a no-op when `window` or the relevant API is
//! missing.

use js_sys::{Array, Function, Object, Promise, Reflect};
use tamizha_core::content::SHARE_TARGET;
use tamizha_core::visibility::needs_scroll_to_top;
use tamizha_core::{
    PointerSample, ScrollMetrics, ShareError, SharePlatform, ShareTarget, Subscription,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Navigator, ScrollBehavior, ScrollToOptions,
};

// ============================================================================
// Window listeners
// ============================================================================

/// A listener attached to `window`, removed again on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::warn!(event, ?err, "failed to add window listener");
            return None;
        }
        Some(Self { event, callback })
    }

    pub fn into_subscription(self) -> Subscription {
        Subscription::from_release(move || drop(self))
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(event = self.event, ?err, "failed to remove window listener");
        }
    }
}

/// Subscribe `handler` to a window event for as long as the returned
/// subscription lives.
pub fn listen_window(
    event: &'static str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Option<Subscription> {
    WindowListener::new(event, passive, handler).map(WindowListener::into_subscription)
}

// ============================================================================
// Geometry
// ============================================================================

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(window.document()?.document_element()?.scroll_height());
    Some(ScrollMetrics::new(scroll_y, document_height, viewport_height))
}

pub fn pointer_sample(event: &MouseEvent) -> Option<PointerSample> {
    let window = web_sys::window()?;
    Some(PointerSample {
        client_x: f64::from(event.client_x()),
        client_y: f64::from(event.client_y()),
        viewport_width: window.inner_width().ok()?.as_f64()?,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Smooth-scroll the viewport to the top. Does nothing when already there.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    if !needs_scroll_to_top(scroll_y) {
        return;
    }
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// ============================================================================
// Share
// ============================================================================

/// `navigator.share` with `navigator.clipboard` as the fallback.
///
/// Both are probed through `Reflect` on every call: browsers without the
/// share sheet simply lack the property, and `clipboard` is undefined
/// outside secure contexts.
pub struct BrowserShare {
    navigator: Navigator,
}

impl BrowserShare {
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|window| Self {
            navigator: window.navigator(),
        })
    }

    fn property(&self, name: &str) -> JsValue {
        Reflect::get(&self.navigator, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SharePlatform for BrowserShare {
    fn can_share(&self) -> bool {
        self.property("share").is_function()
    }

    async fn share(&self, target: &ShareTarget) -> Result<(), ShareError> {
        let rejected = |err: JsValue| ShareError::ShareRejected(describe(&err));

        let data = Object::new();
        for (key, value) in [
            ("title", target.title),
            ("text", target.text),
            ("url", target.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(rejected)?;
        }

        let share_fn: Function = self.property("share").dyn_into().map_err(rejected)?;
        let promise: Promise = share_fn
            .call1(&self.navigator, &data)
            .map_err(rejected)?
            .dyn_into()
            .map_err(rejected)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
    }

    fn can_write_clipboard(&self) -> bool {
        let clipboard = self.property("clipboard");
        !clipboard.is_undefined() && !clipboard.is_null()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let promise = self.navigator.clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ShareError::ClipboardWriteFailed(describe(&err)))
    }
}

/// Click handler body for every share button. Fire and forget.
pub fn share_invite() {
    wasm_bindgen_futures::spawn_local(async {
        let Some(platform) = BrowserShare::detect() else {
            return;
        };
        let outcome = tamizha_core::share(&platform, &SHARE_TARGET).await;
        tracing::debug!(?outcome, "share finished");
    });
}

// ============================================================================
// Viewport watch
// ============================================================================

/// Calls `on_enter` the first time an element intersects the viewport, then
/// stops observing. Disconnects on drop.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    pub fn once(
        element: &Element,
        root_margin: &str,
        mut on_enter: impl FnMut() + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if entered {
                    observer.disconnect();
                    on_enter();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(0.1));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    tracing::warn!(?err, "IntersectionObserver unavailable");
                    return None;
                }
            };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
