use leptos::prelude::*;
use tamizha_core::scroll::progress_bar_style;

/// Thin bar pinned to the top edge, scaled horizontally by smoothed progress.
#[component]
pub fn ProgressBar(progress: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div
            class="progress-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            style=move || progress_bar_style(progress.get())
        ></div>
    }
}
